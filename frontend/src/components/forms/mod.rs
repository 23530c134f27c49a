pub mod lecture_form;
