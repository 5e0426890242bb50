pub mod edit_form;
pub mod table;
