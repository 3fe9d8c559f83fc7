//! Built-in catalogue content written out when the sample files are missing.

use chrono::{Days, NaiveDate};
use natureconnect_core::{Difficulty, Event, EventType, Trail};

struct TrailSeed {
    name: &'static str,
    position: (f64, f64),
    length_miles: f64,
    difficulty: Difficulty,
    features: &'static str,
    description: &'static str,
    image_url: &'static str,
}

const TRAILS: [TrailSeed; 5] = [
    TrailSeed {
        name: "Pine Forest Loop",
        position: (37.7749, -122.4194),
        length_miles: 3.2,
        difficulty: Difficulty::Easy,
        features: "Forest,Wildlife,Scenic Views",
        description: "A beautiful loop through old-growth pine forest with abundant wildlife viewing opportunities.",
        image_url: "https://i.imgur.com/3Cm5BM9.jpg",
    },
    TrailSeed {
        name: "Mountain Vista Trail",
        position: (37.8049, -122.4094),
        length_miles: 5.8,
        difficulty: Difficulty::Moderate,
        features: "Mountain View,Wildflowers,Forest",
        description: "Climb to stunning panoramic views of the surrounding mountains and valleys.",
        image_url: "https://i.imgur.com/Gju4kCM.jpg",
    },
    TrailSeed {
        name: "Crystal Lake Path",
        position: (37.7649, -122.4294),
        length_miles: 2.5,
        difficulty: Difficulty::Easy,
        features: "Lake,Fishing,Wildlife",
        description: "An easy walk around a pristine mountain lake with fishing spots and wildlife viewing areas.",
        image_url: "https://i.imgur.com/K58U4dV.jpg",
    },
    TrailSeed {
        name: "Ridgeline Traverse",
        position: (37.7849, -122.4394),
        length_miles: 7.2,
        difficulty: Difficulty::Hard,
        features: "Mountain View,Waterfall,Forest",
        description: "A challenging hike along a mountain ridge with breathtaking views and a hidden waterfall.",
        image_url: "https://i.imgur.com/QLKL9F5.jpg",
    },
    TrailSeed {
        name: "Waterfall Canyon",
        position: (37.7599, -122.4494),
        length_miles: 4.6,
        difficulty: Difficulty::Moderate,
        features: "Waterfall,Forest,Wildflowers",
        description: "Hike through a lush canyon to a spectacular 60-foot waterfall surrounded by wildflowers.",
        image_url: "https://i.imgur.com/Y2JJ6KQ.jpg",
    },
];

struct EventSeed {
    name: &'static str,
    days_ahead: u64,
    location: &'static str,
    event_type: EventType,
    description: &'static str,
    image_url: &'static str,
}

const EVENTS: [EventSeed; 10] = [
    EventSeed {
        name: "Guided Bird Watching Tour",
        days_ahead: 3,
        location: "Oakridge Nature Reserve",
        event_type: EventType::Birdwatching,
        description: "Join our expert ornithologists for a guided tour to spot and identify local bird species. Binoculars provided!",
        image_url: "https://i.imgur.com/YJOX1CW.jpg",
    },
    EventSeed {
        name: "Forest Bathing Experience",
        days_ahead: 5,
        location: "Pinecrest Woods",
        event_type: EventType::GuidedHike,
        description: "Experience the Japanese practice of Shinrin-yoku (forest bathing) to reduce stress and boost wellbeing through mindful nature immersion.",
        image_url: "https://i.imgur.com/3Cm5BM9.jpg",
    },
    EventSeed {
        name: "River Cleanup Volunteer Day",
        days_ahead: 7,
        location: "Silverstream River",
        event_type: EventType::Conservation,
        description: "Help restore the natural beauty of our local river by joining our cleanup effort. All equipment provided, plus lunch for volunteers!",
        image_url: "https://i.imgur.com/K58U4dV.jpg",
    },
    EventSeed {
        name: "Wildflower Identification Workshop",
        days_ahead: 10,
        location: "Meadow View Park",
        event_type: EventType::Education,
        description: "Learn to identify local wildflower species and understand their ecological importance in this hands-on workshop.",
        image_url: "https://i.imgur.com/VmFbVmE.jpg",
    },
    EventSeed {
        name: "Family Nature Scavenger Hunt",
        days_ahead: 12,
        location: "Community Wilderness Area",
        event_type: EventType::Community,
        description: "A fun event for families to explore nature together through an educational scavenger hunt with prizes!",
        image_url: "https://i.imgur.com/B4mJErA.jpg",
    },
    EventSeed {
        name: "Sunset Yoga in the Park",
        days_ahead: 14,
        location: "Hilltop Gardens",
        event_type: EventType::Community,
        description: "Connect with nature through outdoor yoga as the sun sets. All skill levels welcome. Bring your own mat.",
        image_url: "https://i.imgur.com/QLKL9F5.jpg",
    },
    EventSeed {
        name: "Native Plant Gardening Workshop",
        days_ahead: 17,
        location: "Community Center",
        event_type: EventType::Education,
        description: "Learn how to create a garden that supports local ecosystems using native plant species. Take home a starter plant!",
        image_url: "https://i.imgur.com/Gju4kCM.jpg",
    },
    EventSeed {
        name: "Stargazing Night",
        days_ahead: 20,
        location: "Mountain Ridge Observatory",
        event_type: EventType::Education,
        description: "Join amateur astronomers to observe stars, planets, and constellations. Telescopes provided. Hot chocolate served!",
        image_url: "https://i.imgur.com/bIziVdO.jpg",
    },
    EventSeed {
        name: "Nature Photography Workshop",
        days_ahead: 22,
        location: "Wildlife Sanctuary",
        event_type: EventType::Education,
        description: "Learn techniques for capturing stunning nature photographs with your smartphone or camera. All skill levels welcome.",
        image_url: "https://i.imgur.com/Y2JJ6KQ.jpg",
    },
    EventSeed {
        name: "Trail Maintenance Day",
        days_ahead: 25,
        location: "Red Rock Trails",
        event_type: EventType::Conservation,
        description: "Help maintain our beloved hiking trails for everyone to enjoy. Tools, training, and refreshments provided.",
        image_url: "https://i.imgur.com/Gju4kCM.jpg",
    },
];

/// The five built-in trails, numbered from 1.
pub(crate) fn trails() -> Vec<Trail> {
    (1..)
        .zip(TRAILS.iter())
        .map(|(id, seed)| Trail {
            id,
            name: seed.name.to_owned(),
            latitude: seed.position.0,
            longitude: seed.position.1,
            length_miles: seed.length_miles,
            difficulty: seed.difficulty,
            features: seed.features.to_owned(),
            description: seed.description.to_owned(),
            image_url: seed.image_url.to_owned(),
        })
        .collect()
}

/// The ten built-in events, numbered from 1 and dated relative to `today`.
pub(crate) fn events(today: NaiveDate) -> Vec<Event> {
    (1..)
        .zip(EVENTS.iter())
        .map(|(id, seed)| Event {
            id,
            name: seed.name.to_owned(),
            date: today
                .checked_add_days(Days::new(seed.days_ahead))
                .unwrap_or(NaiveDate::MAX),
            location: seed.location.to_owned(),
            event_type: seed.event_type.clone(),
            description: seed.description.to_owned(),
            image_url: seed.image_url.to_owned(),
        })
        .collect()
}
