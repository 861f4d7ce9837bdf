pub use super::calendar_date::Entity as CalendarDate;
pub use super::distribution_event::Entity as DistributionEvent;
pub use super::event::Entity as Event;
pub use super::event_date::Entity as EventDate;
pub use super::event_item::Entity as EventItem;
pub use super::event_outcome::Entity as EventOutcome;
pub use super::event_request::Entity as EventRequest;
pub use super::item::Entity as Item;
pub use super::location::Entity as Location;
pub use super::recipient::Entity as Recipient;
pub use super::requester::Entity as Requester;
pub use super::service_type::Entity as ServiceType;
pub use super::skill_level::Entity as SkillLevel;
pub use super::survey::Entity as Survey;
pub use super::volunteer::Entity as Volunteer;
