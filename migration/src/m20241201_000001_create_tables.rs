use sea_orm_migration::{prelude::*, schema::*};

use crate::iden::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Lookup tables first so everything else can reference them.
        let table = Table::create()
            .table(Location::Table)
            .col(string(Location::Zip).primary_key())
            .col(string(Location::City))
            .col(string(Location::State))
            .to_owned();
        manager.create_table(table).await?;

        let table = Table::create()
            .table(SkillLevel::Table)
            .col(pk_auto(SkillLevel::SkillId))
            .col(string(SkillLevel::Description))
            .to_owned();
        manager.create_table(table).await?;

        let table = Table::create()
            .table(ServiceType::Table)
            .col(pk_auto(ServiceType::ServiceTypeId))
            .col(string(ServiceType::Description))
            .to_owned();
        manager.create_table(table).await?;

        let table = Table::create()
            .table(Item::Table)
            .col(pk_auto(Item::ItemId))
            .col(string(Item::Description))
            .to_owned();
        manager.create_table(table).await?;

        // Volunteer table, keyed by email. Login credentials live here too.
        let table = Table::create()
            .table(Volunteer::Table)
            .col(string(Volunteer::Email).primary_key())
            .col(string(Volunteer::FirstName))
            .col(string(Volunteer::LastName))
            .col(integer(Volunteer::SkillId).default(1))
            .col(string(Volunteer::Zip))
            .col(string(Volunteer::Phone))
            .col(string(Volunteer::Password))
            .col(boolean(Volunteer::IsTeacher).default(false))
            .col(boolean(Volunteer::IsLeader).default(false))
            .col(string(Volunteer::Availability))
            .col(integer(Volunteer::TravelRange).default(0))
            .col(string(Volunteer::DiscoveryMethod))
            .col(string(Volunteer::Notes))
            .col(string(Volunteer::JobRole).default("Volunteer"))
            .to_owned();
        manager.create_table(table).await?;

        let table = Table::create()
            .table(Event::Table)
            .col(pk_auto(Event::EventId))
            .col(time(Event::StartTime))
            .col(double(Event::PlannedDuration).default(0.0))
            .col(string(Event::Address))
            .col(string(Event::Zip))
            .col(string(Event::Status).default("Pending"))
            .col(string(Event::Details))
            .to_owned();
        manager.create_table(table).await?;

        // One-to-one rows hanging off an event.
        let table = Table::create()
            .table(EventRequest::Table)
            .col(integer(EventRequest::EventId).primary_key())
            .col(integer(EventRequest::ServiceTypeId).default(1))
            .col(string(EventRequest::Organization))
            .col(boolean(EventRequest::WantsStory).default(false))
            .col(integer(EventRequest::StoryMinutes).default(0))
            .col(integer(EventRequest::Sergers).default(0))
            .col(integer(EventRequest::SewingMachines).default(0))
            .col(integer(EventRequest::ChildrenUnder10).default(0))
            .col(integer(EventRequest::AdultParticipants).default(0))
            .col(integer(EventRequest::AdvancedSewers).default(0))
            .col(integer(EventRequest::BasicSewers).default(0))
            .col(integer(EventRequest::VenueSize).default(0))
            .col(integer(EventRequest::NumRooms).default(0))
            .col(integer(EventRequest::NumTablesRound).default(0))
            .col(integer(EventRequest::NumTablesRectangle).default(0))
            .foreign_key(
                ForeignKey::create()
                    .name("fk_event_request_event")
                    .from(EventRequest::Table, EventRequest::EventId)
                    .to(Event::Table, Event::EventId)
                    .on_delete(ForeignKeyAction::Cascade),
            )
            .foreign_key(
                ForeignKey::create()
                    .name("fk_event_request_service_type")
                    .from(EventRequest::Table, EventRequest::ServiceTypeId)
                    .to(ServiceType::Table, ServiceType::ServiceTypeId),
            )
            .to_owned();
        manager.create_table(table).await?;

        let table = Table::create()
            .table(EventOutcome::Table)
            .col(integer(EventOutcome::EventId).primary_key())
            .col(integer(EventOutcome::Headcount).default(0))
            .col(double(EventOutcome::ServiceHours).default(0.0))
            .foreign_key(
                ForeignKey::create()
                    .name("fk_event_outcome_event")
                    .from(EventOutcome::Table, EventOutcome::EventId)
                    .to(Event::Table, Event::EventId)
                    .on_delete(ForeignKeyAction::Cascade),
            )
            .to_owned();
        manager.create_table(table).await?;

        let table = Table::create()
            .table(DistributionEvent::Table)
            .col(integer(DistributionEvent::EventId).primary_key())
            .col(integer(DistributionEvent::Temperature).default(0))
            .foreign_key(
                ForeignKey::create()
                    .name("fk_distribution_event_event")
                    .from(DistributionEvent::Table, DistributionEvent::EventId)
                    .to(Event::Table, Event::EventId)
                    .on_delete(ForeignKeyAction::Cascade),
            )
            .to_owned();
        manager.create_table(table).await?;

        // Calendar dates are shared across events; the date value itself is
        // unique and events link to it through the join table.
        let table = Table::create()
            .table(CalendarDate::Table)
            .col(pk_auto(CalendarDate::DateId))
            .col(date(CalendarDate::Date).unique_key())
            .to_owned();
        manager.create_table(table).await?;

        let table = Table::create()
            .table(EventDate::Table)
            .col(integer(EventDate::EventId))
            .col(integer(EventDate::DateId))
            .primary_key(
                Index::create()
                    .col(EventDate::EventId)
                    .col(EventDate::DateId),
            )
            .foreign_key(
                ForeignKey::create()
                    .name("fk_event_date_event")
                    .from(EventDate::Table, EventDate::EventId)
                    .to(Event::Table, Event::EventId)
                    .on_delete(ForeignKeyAction::Cascade),
            )
            .foreign_key(
                ForeignKey::create()
                    .name("fk_event_date_calendar_date")
                    .from(EventDate::Table, EventDate::DateId)
                    .to(CalendarDate::Table, CalendarDate::DateId)
                    .on_delete(ForeignKeyAction::Cascade),
            )
            .to_owned();
        manager.create_table(table).await?;

        let table = Table::create()
            .table(Requester::Table)
            .col(pk_auto(Requester::RequesterId))
            .col(integer(Requester::EventId))
            .col(string(Requester::FirstName))
            .col(string(Requester::LastName))
            .col(string(Requester::Phone))
            .col(string(Requester::Email))
            .foreign_key(
                ForeignKey::create()
                    .name("fk_requester_event")
                    .from(Requester::Table, Requester::EventId)
                    .to(Event::Table, Event::EventId)
                    .on_delete(ForeignKeyAction::Cascade),
            )
            .to_owned();
        manager.create_table(table).await?;

        let table = Table::create()
            .table(EventItem::Table)
            .col(integer(EventItem::EventId))
            .col(integer(EventItem::ItemId))
            .col(integer(EventItem::Quantity).default(0))
            .primary_key(
                Index::create()
                    .col(EventItem::EventId)
                    .col(EventItem::ItemId),
            )
            .foreign_key(
                ForeignKey::create()
                    .name("fk_event_item_event")
                    .from(EventItem::Table, EventItem::EventId)
                    .to(Event::Table, Event::EventId)
                    .on_delete(ForeignKeyAction::Cascade),
            )
            .foreign_key(
                ForeignKey::create()
                    .name("fk_event_item_item")
                    .from(EventItem::Table, EventItem::ItemId)
                    .to(Item::Table, Item::ItemId)
                    .on_delete(ForeignKeyAction::Cascade),
            )
            .to_owned();
        manager.create_table(table).await?;

        let table = Table::create()
            .table(Recipient::Table)
            .col(pk_auto(Recipient::RecipientId))
            .col(integer(Recipient::EventId))
            .col(string(Recipient::Name))
            .col(integer(Recipient::ItemId))
            .foreign_key(
                ForeignKey::create()
                    .name("fk_recipient_event")
                    .from(Recipient::Table, Recipient::EventId)
                    .to(Event::Table, Event::EventId)
                    .on_delete(ForeignKeyAction::Cascade),
            )
            .foreign_key(
                ForeignKey::create()
                    .name("fk_recipient_item")
                    .from(Recipient::Table, Recipient::ItemId)
                    .to(Item::Table, Item::ItemId),
            )
            .to_owned();
        manager.create_table(table).await?;

        let table = Table::create()
            .table(Survey::Table)
            .col(string(Survey::DiscoveryMethod).primary_key())
            .col(integer(Survey::Total).default(0))
            .to_owned();
        manager.create_table(table).await?;

        // Create indices for common lookups
        manager
            .create_index(
                Index::create()
                    .name("idx_event_date_event")
                    .table(EventDate::Table)
                    .col(EventDate::EventId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_requester_event")
                    .table(Requester::Table)
                    .col(Requester::EventId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_recipient_event")
                    .table(Recipient::Table)
                    .col(Recipient::EventId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_event_status")
                    .table(Event::Table)
                    .col(Event::Status)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Drop all tables in reverse order to avoid foreign key constraints
        manager
            .drop_table(Table::drop().table(Survey::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Recipient::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(EventItem::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Requester::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(EventDate::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(CalendarDate::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(DistributionEvent::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(EventOutcome::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(EventRequest::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Event::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Volunteer::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Item::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(ServiceType::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(SkillLevel::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Location::Table).to_owned())
            .await?;

        Ok(())
    }
}
