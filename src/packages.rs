//! Compiled-in sweep configuration
//!
//! The base directory and the package list are fixed at build time; editing
//! this file is the only way to change what gets swept.

/// Root folder containing all package checkouts
pub const BASE_DIR: &str = "/Users/christophechanteur/Development/Flutter_projects/s_packages";

/// Package directories to sweep, in processing order
pub const PACKAGES: &[&str] = &[
    "bubble_label",
    "s_button",
    "s_dropdown",
    "s_modal",
    "s_toggle",
    "s_widgets",
    "s_banner",
    "s_bounceable",
    "s_client",
    "s_connectivity",
    "s_context_menu",
    "s_disabled",
    "s_error_widget",
    "s_expendable_menu",
    "s_future_button",
    "s_glow",
    "s_gridview",
    "s_ink_button",
    "s_liquid_pull_to_refresh",
    "s_maintenance_button",
    "s_offstage",
    "s_screenshot",
    "s_sidebar",
    "s_standby",
    "s_time",
    "s_webview",
    "s_animated_tabs",
    "indexscroll_listview_builder",
    "keystroke_listener",
    "pop_overlay",
    "pop_this",
    "post_frame",
    "settings_item",
    "shaker",
    "signals_watch",
    "soundsliced_dart_extensions",
    "soundsliced_tween_animation_builder",
    "states_rebuilder_extended",
    "ticker_free_circular_progress_indicator",
    "week_calendar",
];
