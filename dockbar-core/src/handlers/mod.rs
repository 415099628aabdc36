mod client_list_handler;
mod display_event_handler;
mod panel_handler;
