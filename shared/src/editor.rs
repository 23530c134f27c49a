//! # Day Editor
//!
//! State machine behind the day modal. The editor opens on the list of a
//! day's lectures and switches to a form for adding or editing a single
//! lecture. Saving hands a [`SaveLecture`] back to the owner of the
//! collection and returns to the list; deleting closes the whole editor,
//! which is the caller's job once it has the ID from [`DayEditor::delete_target`].

use chrono::NaiveDate;

use crate::error::LectureValidationError;
use crate::lecture::{date_key, validate_lecture_input, Lecture, LectureBook};

/// What the form is bound to
#[derive(Debug, Clone, PartialEq)]
pub enum FormTarget {
    New,
    Edit(Lecture),
}

/// The two views of the day editor
#[derive(Debug, Clone, PartialEq)]
pub enum EditorView {
    List,
    Form(FormTarget),
}

/// A validated save request coming out of the form
#[derive(Debug, Clone, PartialEq)]
pub struct SaveLecture {
    pub title: String,
    pub amount: f64,
    /// Present when editing an existing lecture
    pub id: Option<String>,
}

impl SaveLecture {
    /// Apply this save to the collection. New lectures are appended on
    /// `date`; edits keep their ID and date. Returns the affected ID, or
    /// `None` if an edit targeted a lecture that no longer exists.
    pub fn apply_to(
        self,
        book: &mut LectureBook,
        date: NaiveDate,
        epoch_millis: u64,
    ) -> Option<String> {
        match self.id {
            Some(id) => book.update(&id, self.title, self.amount).then_some(id),
            None => Some(book.add(date, self.title, self.amount, epoch_millis)),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DayEditor {
    date: NaiveDate,
    view: EditorView,
    error: Option<LectureValidationError>,
}

impl DayEditor {
    /// Open the editor for a day, always starting on the list view
    pub fn open(date: NaiveDate) -> Self {
        Self {
            date,
            view: EditorView::List,
            error: None,
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn date_key(&self) -> String {
        date_key(self.date)
    }

    pub fn view(&self) -> &EditorView {
        &self.view
    }

    /// Inline validation error of the last submit, if any
    pub fn error(&self) -> Option<&LectureValidationError> {
        self.error.as_ref()
    }

    /// The lecture bound to the form when editing
    pub fn editing(&self) -> Option<&Lecture> {
        match &self.view {
            EditorView::Form(FormTarget::Edit(lecture)) => Some(lecture),
            _ => None,
        }
    }

    pub fn add(&mut self) {
        self.view = EditorView::Form(FormTarget::New);
        self.error = None;
    }

    pub fn edit(&mut self, lecture: Lecture) {
        self.view = EditorView::Form(FormTarget::Edit(lecture));
        self.error = None;
    }

    /// Leave the form without saving
    pub fn cancel(&mut self) {
        self.view = EditorView::List;
        self.error = None;
    }

    /// Initial title and amount inputs for the form
    pub fn form_inputs(&self) -> (String, String) {
        match self.editing() {
            Some(lecture) => (lecture.title.clone(), lecture.amount.to_string()),
            None => (String::new(), String::new()),
        }
    }

    /// Validate the form. On success the editor goes back to the list and
    /// the save request is returned; on failure it stays on the form.
    pub fn submit(
        &mut self,
        title: &str,
        amount: &str,
    ) -> Result<SaveLecture, LectureValidationError> {
        let id = match &self.view {
            EditorView::Form(FormTarget::New) => None,
            EditorView::Form(FormTarget::Edit(lecture)) => Some(lecture.id.clone()),
            EditorView::List => {
                log::warn!("Submit received while the editor shows the list");
                None
            }
        };

        match validate_lecture_input(title, amount) {
            Ok((title, amount)) => {
                self.view = EditorView::List;
                self.error = None;
                Ok(SaveLecture { title, amount, id })
            }
            Err(e) => {
                log::debug!("Lecture form rejected: {:?}", e);
                self.error = Some(e.clone());
                Err(e)
            }
        }
    }

    /// ID to delete, only available while editing an existing lecture
    pub fn delete_target(&self) -> Option<&str> {
        self.editing().map(|l| l.id.as_str())
    }
}
