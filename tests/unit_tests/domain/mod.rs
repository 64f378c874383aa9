mod parameter_test;
mod ui_state_test;
