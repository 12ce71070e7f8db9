pub mod use_outside_click;
