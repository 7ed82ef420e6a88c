pub mod charts;
pub mod header;
pub mod layout;
pub mod loading;
pub mod modal;
pub mod protected_route;
pub mod sidebar;
pub mod stat_card;
pub mod status_badge;
