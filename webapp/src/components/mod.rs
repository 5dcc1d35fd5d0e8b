pub mod document_list;
pub mod input_search;
pub mod language_prompt;
pub mod navigation;
pub mod new_document_menu;
pub mod scene;
pub mod tabs;
