//! UI Components
//!
//! Reusable Leptos components.

mod section_list;
mod section_card;
mod new_section_form;
mod custom_section_form;
mod delete_confirm_button;

pub use section_list::SectionList;
pub use section_card::SectionCard;
pub use new_section_form::NewSectionForm;
pub use custom_section_form::CustomSectionForm;
pub use delete_confirm_button::DeleteConfirmButton;
