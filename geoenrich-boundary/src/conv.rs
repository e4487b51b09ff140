use super::*;
use geoenrich_entities as e;

impl From<EventId> for e::event::EventId {
    fn from(from: EventId) -> Self {
        match from {
            EventId::Number(n) => Self::Number(n),
            EventId::Text(s) => Self::Text(s),
            EventId::Other(v) => Self::Other(v.to_string()),
        }
    }
}

impl From<e::event::EventId> for EventId {
    fn from(from: e::event::EventId) -> Self {
        match from {
            e::event::EventId::Number(n) => Self::Number(n),
            e::event::EventId::Text(s) => Self::Text(s),
            e::event::EventId::Other(json) => match serde_json::from_str(&json) {
                Ok(v) => Self::Other(v),
                Err(_) => Self::Text(json),
            },
        }
    }
}

impl From<Event> for e::event::Event {
    fn from(from: Event) -> Self {
        let Event {
            id,
            title,
            location,
            area,
        } = from;
        Self {
            id: id.into(),
            title: title.unwrap_or_default(),
            location_address: location.and_then(|l| l.address),
            area_address: area.and_then(|a| a.address),
        }
    }
}

impl From<e::record::EnrichedRecord> for EnrichedEvent {
    fn from(from: e::record::EnrichedRecord) -> Self {
        let e::record::EnrichedRecord {
            id,
            title,
            address,
            enrichment,
        } = from;
        let (lat, lon, error) = match enrichment {
            e::record::Enrichment::Located(pos) => (Some(pos.lat()), Some(pos.lon()), None),
            e::record::Enrichment::Unlocated => (None, None, None),
            e::record::Enrichment::Failed { reason } => (None, None, Some(reason)),
        };
        Self {
            id: id.into(),
            title,
            address,
            lat,
            lon,
            error,
        }
    }
}

impl StoredEvent {
    /// The address and its position if both are available.
    pub fn resolved(&self) -> Option<(&str, e::geo::Coordinate)> {
        let address = self.address.as_deref().filter(|a| !a.is_empty())?;
        let (lat, lon) = (self.lat?, self.lon?);
        let pos = e::geo::Coordinate::try_from_lat_lon_deg(lat, lon).ok()?;
        Some((address, pos))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_from_listing() {
        let event = Event {
            id: EventId::Number(3),
            title: Some("C".into()),
            location: None,
            area: Some(EventArea {
                address: Some("Gothenburg".into()),
            }),
        };
        let event = e::event::Event::from(event);
        assert_eq!("Gothenburg", event.address());
        assert_eq!(e::event::EventId::Number(3), event.id);
    }

    #[test]
    fn unusual_ids_are_echoed_unchanged() {
        let events: Vec<Event> = serde_json::from_str(
            r#"[{"id":2.5,"title":null},{"id":18446744073709551615,"title":"B"}]"#,
        )
        .unwrap();
        let echoed: Vec<_> = events
            .into_iter()
            .map(e::event::Event::from)
            .map(|event| e::record::EnrichedRecord {
                id: event.id,
                title: event.title,
                address: String::new(),
                enrichment: e::record::Enrichment::Unlocated,
            })
            .map(EnrichedEvent::from)
            .collect();
        assert_eq!(
            r#"[{"id":2.5,"title":"","address":""},{"id":18446744073709551615,"title":"B","address":""}]"#,
            serde_json::to_string(&echoed).unwrap()
        );
    }

    #[test]
    fn failed_record_carries_only_the_error() {
        let record = e::record::EnrichedRecord {
            id: e::event::EventId::Number(1),
            title: "A".into(),
            address: "Nowhere".into(),
            enrichment: e::record::Enrichment::Failed {
                reason: "timeout".into(),
            },
        };
        let event = EnrichedEvent::from(record);
        assert_eq!(None, event.lat);
        assert_eq!(None, event.lon);
        assert_eq!(Some("timeout"), event.error.as_deref());
    }

    #[test]
    fn stored_event_needs_address_and_both_coordinates() {
        let mut stored = StoredEvent {
            address: Some("Stockholm".into()),
            lat: Some(59.33),
            lon: Some(18.06),
        };
        let (address, pos) = stored.resolved().unwrap();
        assert_eq!("Stockholm", address);
        assert_eq!(18.06, pos.lon());

        stored.lon = None;
        assert!(stored.resolved().is_none());

        let stored = StoredEvent {
            address: Some(String::new()),
            lat: Some(1.0),
            lon: Some(2.0),
        };
        assert!(stored.resolved().is_none());
    }
}
