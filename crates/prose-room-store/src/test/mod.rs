// prose-core-client/prose-room-store
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use message_builder::MessageBuilder;
pub use room_builder::RoomBuilder;


pub mod mock_data {
    use chrono::{DateTime, TimeZone, Utc};
    use jid::BareJid;

    use crate::domain::shared::models::RoomId;

    pub fn reference_date() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2021, 9, 6, 0, 0, 0)
            .single()
            .unwrap_or_default()
    }

    pub fn room_id() -> RoomId {
        crate::room_id!("room@conference.example.com")
    }

    pub fn muc_service() -> BareJid {
        crate::bare!("conference.example.com")
    }
}

#[macro_export]
macro_rules! bare {
    ($jid:expr) => {
        $jid.parse::<jid::BareJid>().unwrap()
    };
}

#[macro_export]
macro_rules! room_id {
    ($jid:expr) => {
        $crate::domain::shared::models::RoomId::from($jid.parse::<jid::BareJid>().unwrap())
    };
}

#[macro_export]
macro_rules! occupant_id {
    ($jid:expr) => {
        $crate::domain::shared::models::OccupantId::from($jid.parse::<jid::FullJid>().unwrap())
    };
}
