pub mod prelude;

pub mod calendar_date;
pub mod distribution_event;
pub mod event;
pub mod event_date;
pub mod event_item;
pub mod event_outcome;
pub mod event_request;
pub mod item;
pub mod location;
pub mod recipient;
pub mod requester;
pub mod service_type;
pub mod skill_level;
pub mod survey;
pub mod volunteer;
