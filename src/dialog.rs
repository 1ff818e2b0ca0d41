// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Single-shot dialogs and confirmation prompts
//!
//! A dialog is opened as a handle/receiver pair. The handle answers exactly
//! once; dropping it unanswered counts as a cancel.

use std::sync::Mutex;
use tokio::sync::oneshot;

/// How a dialog was closed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogOutcome<T> {
    /// The user submitted valid values
    Submitted(T),
    /// Closed without submitting
    Cancelled,
    /// The dialog itself failed
    Failed(String),
}

/// Answering side of a dialog
#[derive(Debug)]
pub struct DialogHandle<T> {
    sender: oneshot::Sender<DialogOutcome<T>>,
}

impl<T> DialogHandle<T> {
    /// Close with submitted values
    pub fn submit(self, value: T) {
        self.resolve(DialogOutcome::Submitted(value));
    }

    /// Close without submitting
    pub fn cancel(self) {
        self.resolve(DialogOutcome::Cancelled);
    }

    /// Close with an error
    pub fn fail(self, message: impl Into<String>) {
        self.resolve(DialogOutcome::Failed(message.into()));
    }

    fn resolve(self, outcome: DialogOutcome<T>) {
        // Receiver already gone: nobody is waiting for the answer
        if self.sender.send(outcome).is_err() {
            tracing::debug!("dialog answered after its caller stopped waiting");
        }
    }
}

/// Waiting side of a dialog
#[derive(Debug)]
pub struct Dialog<T> {
    receiver: oneshot::Receiver<DialogOutcome<T>>,
}

impl<T> Dialog<T> {
    /// A dialog that is already closed with `outcome`
    #[must_use]
    pub fn ready(outcome: DialogOutcome<T>) -> Self {
        let (handle, dialog) = open();
        handle.resolve(outcome);
        dialog
    }

    /// Wait for the dialog to close
    pub async fn outcome(self) -> DialogOutcome<T> {
        self.receiver.await.unwrap_or(DialogOutcome::Cancelled)
    }
}

/// Open a dialog
#[must_use]
pub fn open<T>() -> (DialogHandle<T>, Dialog<T>) {
    let (sender, receiver) = oneshot::channel();
    (DialogHandle { sender }, Dialog { receiver })
}

// =============================================================================
// Confirmation prompts
// =============================================================================

/// A yes/no question about one record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmPrompt {
    /// Heading, e.g. "Are you sure you want to delete this extension?"
    pub label: String,
    /// Description of the record concerned
    pub content: String,
    /// Text of the confirming button
    pub yes: &'static str,
    /// Text of the declining button
    pub no: &'static str,
}

impl ConfirmPrompt {
    /// Prompt for a removal
    pub fn remove(label: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            content: content.into(),
            yes: "Remove",
            no: "Cancel",
        }
    }
}

/// Answers confirmation prompts
pub trait Prompter: Send + Sync {
    /// True when the user confirmed
    fn confirm(&self, prompt: &ConfirmPrompt) -> bool;
}

/// Prompter that always gives the same answer and remembers what it was asked
#[derive(Debug, Default)]
pub struct FixedAnswer {
    answer: bool,
    asked: Mutex<Vec<ConfirmPrompt>>,
}

impl FixedAnswer {
    /// Confirm every prompt
    #[must_use]
    pub fn yes() -> Self {
        Self {
            answer: true,
            asked: Mutex::default(),
        }
    }

    /// Decline every prompt
    #[must_use]
    pub fn no() -> Self {
        Self::default()
    }

    /// Prompts seen so far
    pub fn asked(&self) -> Vec<ConfirmPrompt> {
        self.asked.lock().map(|a| a.clone()).unwrap_or_default()
    }
}

impl Prompter for FixedAnswer {
    fn confirm(&self, prompt: &ConfirmPrompt) -> bool {
        if let Ok(mut asked) = self.asked.lock() {
            asked.push(prompt.clone());
        }
        self.answer
    }
}
