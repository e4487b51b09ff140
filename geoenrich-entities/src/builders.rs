pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::event_builder::*;

pub mod event_builder {

    use super::*;
    use crate::event::*;

    #[derive(Debug)]
    pub struct EventBuild {
        event: Event,
    }

    impl EventBuild {
        pub fn id(mut self, id: impl Into<EventId>) -> Self {
            self.event.id = id.into();
            self
        }
        pub fn title(mut self, title: &str) -> Self {
            self.event.title = title.into();
            self
        }
        pub fn location_address(mut self, address: &str) -> Self {
            self.event.location_address = Some(address.into());
            self
        }
        pub fn area_address(mut self, address: &str) -> Self {
            self.event.area_address = Some(address.into());
            self
        }
        pub fn finish(self) -> Event {
            self.event
        }
    }

    impl Builder for Event {
        type Build = EventBuild;
        fn build() -> EventBuild {
            EventBuild {
                event: Event {
                    id: EventId::Number(0),
                    title: String::new(),
                    location_address: None,
                    area_address: None,
                },
            }
        }
    }
}
