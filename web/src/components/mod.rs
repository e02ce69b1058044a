pub mod floating_label_inputs;
pub mod foodgram_title;
pub mod loading;
pub mod sign_up_form;
