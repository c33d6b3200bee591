use super::{ContentSource, Result};
use crate::event::{Event, EventCategory};
use async_trait::async_trait;

/// The department's published event catalog, compiled into the binary
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinSource;

impl BuiltinSource {
    pub fn events() -> Vec<Event> {
        vec![
            Event::new(1, "AI in Embedded Systems", EventCategory::Seminar, "2025-12-15")
                .with_time("2:00 PM - 4:00 PM")
                .with_location("ECE Auditorium")
                .with_description(
                    "Explore the integration of artificial intelligence in embedded systems and IoT devices.",
                )
                .with_speaker("Dr. Sarah Johnson, MIT"),
            Event::new(2, "PCB Design Workshop", EventCategory::Workshop, "2025-12-20")
                .with_time("10:00 AM - 3:00 PM")
                .with_location("Electronics Lab 2")
                .with_description(
                    "Hands-on workshop on advanced PCB design techniques using industry-standard tools.",
                )
                .with_speaker("Prof. Michael Chen"),
            Event::new(
                3,
                "IEEE International Conference on Robotics",
                EventCategory::Conference,
                "2026-01-10",
            )
            .with_time("9:00 AM - 5:00 PM")
            .with_location("Main Campus Convention Center")
            .with_description(
                "Annual conference featuring cutting-edge research in robotics and automation.",
            ),
            Event::new(4, "New Lab Equipment Arrival", EventCategory::Announcement, "2025-11-25")
                .with_time("All Day")
                .with_location("Department Office")
                .with_description(
                    "State-of-the-art oscilloscopes and signal analyzers have been installed in Lab 3.",
                ),
            Event::new(5, "5G Networks and Beyond", EventCategory::Seminar, "2026-01-05")
                .with_time("3:00 PM - 5:00 PM")
                .with_location("ECE Auditorium")
                .with_description(
                    "Understanding the architecture and applications of next-generation wireless networks.",
                )
                .with_speaker("Dr. Emily Rodriguez"),
            Event::new(6, "FPGA Programming Bootcamp", EventCategory::Workshop, "2026-01-15")
                .with_time("9:00 AM - 4:00 PM")
                .with_location("Digital Systems Lab")
                .with_description("Intensive training on FPGA programming using VHDL and Verilog.")
                .with_speaker("Prof. David Kim"),
            Event::new(7, "Exam Schedule Released", EventCategory::Announcement, "2025-11-20")
                .with_time("All Day")
                .with_location("Online Portal")
                .with_description(
                    "Final examination schedule for Fall 2025 semester has been published.",
                ),
            Event::new(
                8,
                "International Symposium on Computer Vision",
                EventCategory::Conference,
                "2026-02-20",
            )
            .with_time("8:00 AM - 6:00 PM")
            .with_location("City Conference Hall")
            .with_description(
                "Leading researchers present their work on machine learning and computer vision.",
            ),
        ]
    }
}

#[async_trait]
impl ContentSource for BuiltinSource {
    fn describe(&self) -> String {
        "built-in department catalog".to_string()
    }

    async fn fetch_events(&self) -> Result<Vec<Event>> {
        Ok(Self::events())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[tokio::test]
    async fn test_builtin_catalog() {
        let events = BuiltinSource.fetch_events().await.unwrap();
        assert_eq!(events.len(), 8);

        let ids: HashSet<_> = events.iter().map(|e| e.id.clone()).collect();
        assert_eq!(ids.len(), events.len());
        assert!(events.iter().all(|e| e.day().is_some()));
        assert!(events.iter().all(|e| !e.title.is_empty()));
    }

    #[test]
    fn test_announcements_have_no_speaker() {
        for event in BuiltinSource::events() {
            if event.category == EventCategory::Announcement {
                assert!(event.speaker.is_none(), "{} has a speaker", event.title);
            }
        }
    }
}
