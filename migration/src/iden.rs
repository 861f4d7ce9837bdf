use sea_orm_migration::prelude::*;

// Define table names
#[derive(DeriveIden)]
pub enum Location {
    Table,
    Zip,
    City,
    State,
}

#[derive(DeriveIden)]
pub enum SkillLevel {
    Table,
    SkillId,
    Description,
}

#[derive(DeriveIden)]
pub enum Volunteer {
    Table,
    Email,
    FirstName,
    LastName,
    SkillId,
    Zip,
    Phone,
    Password,
    IsTeacher,
    IsLeader,
    Availability,
    TravelRange,
    DiscoveryMethod,
    Notes,
    JobRole,
}

#[derive(DeriveIden)]
pub enum Event {
    Table,
    EventId,
    StartTime,
    PlannedDuration,
    Address,
    Zip,
    Status,
    Details,
}

#[derive(DeriveIden)]
pub enum ServiceType {
    Table,
    ServiceTypeId,
    Description,
}

#[derive(DeriveIden)]
pub enum EventRequest {
    Table,
    EventId,
    ServiceTypeId,
    Organization,
    WantsStory,
    StoryMinutes,
    Sergers,
    SewingMachines,
    ChildrenUnder10,
    AdultParticipants,
    AdvancedSewers,
    BasicSewers,
    VenueSize,
    NumRooms,
    NumTablesRound,
    NumTablesRectangle,
}

#[derive(DeriveIden)]
pub enum EventOutcome {
    Table,
    EventId,
    Headcount,
    ServiceHours,
}

#[derive(DeriveIden)]
pub enum DistributionEvent {
    Table,
    EventId,
    Temperature,
}

#[derive(DeriveIden)]
pub enum CalendarDate {
    Table,
    DateId,
    Date,
}

#[derive(DeriveIden)]
pub enum EventDate {
    Table,
    EventId,
    DateId,
}

#[derive(DeriveIden)]
pub enum Requester {
    Table,
    RequesterId,
    EventId,
    FirstName,
    LastName,
    Phone,
    Email,
}

#[derive(DeriveIden)]
pub enum Item {
    Table,
    ItemId,
    Description,
}

#[derive(DeriveIden)]
pub enum EventItem {
    Table,
    EventId,
    ItemId,
    Quantity,
}

#[derive(DeriveIden)]
pub enum Recipient {
    Table,
    RecipientId,
    EventId,
    Name,
    ItemId,
}

#[derive(DeriveIden)]
pub enum Survey {
    Table,
    DiscoveryMethod,
    Total,
}
