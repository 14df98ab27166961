//! Seed dataset for an empty store
//!
//! A small population of students and mentors plus starter projects, events,
//! and micro tasks. The store loads these once, when the users collection is
//! empty (see [`crate::storage::Store::initialize_with_seed_data`]).

use crate::types::{
    Event, EventType, MicroTask, Project, ProjectStatus, Role, UserProfile,
};

fn user(
    id: &str,
    name: &str,
    email: &str,
    role: Role,
    bio: &str,
    skills: &[&str],
    interests: &[&str],
    branch: &str,
    year: i32,
    compatibility: Option<u8>,
    badges: &[&str],
) -> UserProfile {
    UserProfile {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        role,
        avatar: format!(
            "https://picsum.photos/seed/{}/200",
            name.split_whitespace().next().unwrap_or(id).to_lowercase()
        ),
        bio: bio.to_string(),
        skills: skills.iter().map(|s| s.to_string()).collect(),
        interests: interests.iter().map(|s| s.to_string()).collect(),
        branch: branch.to_string(),
        year,
        compatibility,
        badges: badges.iter().map(|s| s.to_string()).collect(),
    }
}

/// Seed user population
pub fn seed_users() -> Vec<UserProfile> {
    vec![
        user(
            "1",
            "Alex Johnson",
            "alex@example.edu",
            Role::Student,
            "Full-stack developer passionate about AI and sustainability.",
            &["React", "Node.js", "Python", "TensorFlow"],
            &["Green Tech", "Machine Learning", "Open Source"],
            "Computer Science",
            3,
            Some(95),
            &["Hackathon Pro", "Top Contributor"],
        ),
        user(
            "2",
            "Sarah Chen",
            "sarah@example.edu",
            Role::Student,
            "UI/UX Designer with a love for clean aesthetics and user-centric design.",
            &["Figma", "Adobe XD", "CSS", "Tailwind"],
            &["Design Systems", "Accessibility", "Web3"],
            "Information Technology",
            2,
            Some(88),
            &["Design Guru"],
        ),
        user(
            "3",
            "Dr. Robert Miller",
            "robert@example.edu",
            Role::Mentor,
            "Professor of Data Science with 15 years of industry experience.",
            &["Data Analysis", "R", "Statistics", "Leadership"],
            &["Big Data", "Ethics in AI"],
            "Data Science",
            0,
            None,
            &["Expert Mentor"],
        ),
        user(
            "4",
            "Priya Sharma",
            "priya@example.edu",
            Role::Student,
            "Backend enthusiast and competitive programmer.",
            &["C++", "Java", "SQL", "Docker"],
            &["Distributed Systems", "Cloud Computing"],
            "Computer Science",
            4,
            Some(82),
            &["Code Master"],
        ),
        user(
            "5",
            "Michael Rodriguez",
            "michael@example.edu",
            Role::Student,
            "Mobile app developer specializing in iOS and React Native.",
            &["Swift", "React Native", "Firebase", "GraphQL"],
            &["Mobile Development", "UI/UX", "Startups"],
            "Computer Science",
            3,
            Some(91),
            &["Mobile Expert", "Innovation Award"],
        ),
        user(
            "6",
            "Emma Thompson",
            "emma@example.edu",
            Role::Student,
            "Data science enthusiast with a passion for visualization and storytelling.",
            &["Python", "R", "Tableau", "Machine Learning"],
            &["Data Visualization", "Climate Science", "Education"],
            "Data Science",
            2,
            Some(87),
            &["Data Wizard", "Research Star"],
        ),
        user(
            "7",
            "Dr. Amanda Foster",
            "amanda@example.edu",
            Role::Mentor,
            "AI researcher specializing in natural language processing and ethics.",
            &["NLP", "Python", "Research Methods", "Academic Writing"],
            &["AI Ethics", "Linguistics", "Research"],
            "Artificial Intelligence",
            0,
            None,
            &["AI Pioneer", "Research Leader"],
        ),
        user(
            "8",
            "Sophia Martinez",
            "sophia@example.edu",
            Role::Student,
            "Frontend developer with an eye for detail and user experience.",
            &["Vue.js", "TypeScript", "SASS", "Webpack"],
            &["Frontend Architecture", "Performance", "Design"],
            "Information Technology",
            2,
            Some(90),
            &["Frontend Master", "UX Enthusiast"],
        ),
    ]
}

/// Seed project listings
pub fn seed_projects() -> Vec<Project> {
    vec![
        Project {
            id: "p1".to_string(),
            title: "EcoTrack App".to_string(),
            description: "A mobile app to track personal carbon footprint using real-time data."
                .to_string(),
            tags: vec![
                "Mobile".to_string(),
                "Sustainability".to_string(),
                "React Native".to_string(),
            ],
            members: vec!["1".to_string(), "2".to_string()],
            status: ProjectStatus::Ongoing,
        },
        Project {
            id: "p2".to_string(),
            title: "Campus Marketplace".to_string(),
            description: "A peer-to-peer marketplace for students to buy and sell textbooks."
                .to_string(),
            tags: vec![
                "Web".to_string(),
                "E-commerce".to_string(),
                "Firebase".to_string(),
            ],
            members: vec!["4".to_string()],
            status: ProjectStatus::Idea,
        },
    ]
}

/// Seed campus events
pub fn seed_events() -> Vec<Event> {
    vec![
        Event {
            id: "e1".to_string(),
            title: "Spring Hackathon 2026".to_string(),
            date: "2026-03-15".to_string(),
            location: "Main Hall".to_string(),
            event_type: EventType::Hackathon,
        },
        Event {
            id: "e2".to_string(),
            title: "AI Ethics Workshop".to_string(),
            date: "2026-03-20".to_string(),
            location: "Online".to_string(),
            event_type: EventType::Workshop,
        },
    ]
}

/// Seed micro collaboration tasks
pub fn seed_tasks() -> Vec<MicroTask> {
    vec![
        MicroTask {
            id: "t1".to_string(),
            title: "Need help with CSS Grid".to_string(),
            description: "I am struggling with a complex layout for my portfolio.".to_string(),
            author: "Sarah Chen".to_string(),
            skills_required: vec!["CSS".to_string(), "HTML".to_string()],
            reward: "Coffee / Shoutout".to_string(),
            created_at: "2026-02-25".to_string(),
        },
        MicroTask {
            id: "t2".to_string(),
            title: "Python Script Debugging".to_string(),
            description: "My data processing script is throwing a memory error.".to_string(),
            author: "Alex Johnson".to_string(),
            skills_required: vec!["Python".to_string(), "Debugging".to_string()],
            reward: "Peer Review".to_string(),
            created_at: "2026-02-26".to_string(),
        },
    ]
}
