use chrono::NaiveDate;
use rand::seq::SliceRandom;

use crate::models::{Hackathon, HackathonStatus, User};

/// Hackathons the dashboard can browse, plus the sample accounts used by
/// the mock OAuth login.
pub struct HackathonCatalog {
    hackathons: Vec<Hackathon>,
    sample_users: Vec<User>,
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn skills(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

impl HackathonCatalog {
    pub fn new(hackathons: Vec<Hackathon>, sample_users: Vec<User>) -> Self {
        Self {
            hackathons,
            sample_users,
        }
    }

    pub fn builtin() -> Self {
        let hackathons = vec![
            Hackathon {
                id: 1,
                title: "HackTheFuture 2025".to_string(),
                organizer: "Tech University".to_string(),
                theme: "AI for Social Good".to_string(),
                image: "https://picsum.photos/seed/hackthefuture/800/400".to_string(),
                description: "A 36-hour sprint building AI tools that help local communities."
                    .to_string(),
                registration_start: date(2025, 9, 1),
                registration_end: date(2025, 10, 15),
                event_start: date(2025, 11, 1),
                event_end: date(2025, 11, 2),
                status: HackathonStatus::Upcoming,
                register_link: "https://example.com/hackthefuture".to_string(),
                required_skills: skills(&["Python", "Machine Learning", "React", "Figma"]),
            },
            Hackathon {
                id: 2,
                title: "Web3 Builders Weekend".to_string(),
                organizer: "Chain Collective".to_string(),
                theme: "Decentralized Finance".to_string(),
                image: "https://picsum.photos/seed/web3builders/800/400".to_string(),
                description: "Ship a working dApp over one weekend with mentors on call."
                    .to_string(),
                registration_start: date(2025, 8, 1),
                registration_end: date(2025, 9, 20),
                event_start: date(2025, 10, 18),
                event_end: date(2025, 10, 20),
                status: HackathonStatus::Ongoing,
                register_link: "https://example.com/web3builders".to_string(),
                required_skills: skills(&["Solidity", "React", "Node.js"]),
            },
            Hackathon {
                id: 3,
                title: "GreenCode Challenge".to_string(),
                organizer: "Open Climate Lab".to_string(),
                theme: "Sustainability".to_string(),
                image: "https://picsum.photos/seed/greencode/800/400".to_string(),
                description: "Build software that measures and reduces carbon footprints."
                    .to_string(),
                registration_start: date(2025, 3, 1),
                registration_end: date(2025, 4, 1),
                event_start: date(2025, 4, 12),
                event_end: date(2025, 4, 13),
                status: HackathonStatus::Past,
                register_link: "https://example.com/greencode".to_string(),
                required_skills: skills(&["React", "MongoDB", "Figma", "Data Visualization"]),
            },
            Hackathon {
                id: 4,
                title: "HealthHack Sprint".to_string(),
                organizer: "MedTech Society".to_string(),
                theme: "Digital Health".to_string(),
                image: "https://picsum.photos/seed/healthhack/800/400".to_string(),
                description: "Prototype patient-facing apps with real clinicians as judges."
                    .to_string(),
                registration_start: date(2025, 10, 1),
                registration_end: date(2025, 11, 30),
                event_start: date(2025, 12, 6),
                event_end: date(2025, 12, 7),
                status: HackathonStatus::Upcoming,
                register_link: "https://example.com/healthhack".to_string(),
                required_skills: skills(&["Flutter", "Firebase", "UI/UX Design", "Python"]),
            },
        ];

        let sample_users = vec![
            User {
                id: 1,
                name: "Alice Johnson".to_string(),
                college: "State University".to_string(),
                email: "alice@state.edu".to_string(),
                avatar_url: "https://i.pravatar.cc/150?u=alice".to_string(),
                skills: skills(&["React", "Node.js", "MongoDB"]),
                github: Some("https://github.com/alice".to_string()),
                linkedin: None,
            },
            User {
                id: 2,
                name: "Bob Smith".to_string(),
                college: "Tech Institute".to_string(),
                email: "bob@tech.edu".to_string(),
                avatar_url: "https://i.pravatar.cc/150?u=bob".to_string(),
                skills: skills(&["Python", "Machine Learning", "TensorFlow"]),
                github: None,
                linkedin: Some("https://linkedin.com/in/bob".to_string()),
            },
            User {
                id: 3,
                name: "Chloe Kim".to_string(),
                college: "Design College".to_string(),
                email: "chloe@design.edu".to_string(),
                avatar_url: "https://i.pravatar.cc/150?u=chloe".to_string(),
                skills: skills(&["Figma", "UI/UX Design", "Flutter"]),
                github: None,
                linkedin: None,
            },
        ];

        Self::new(hackathons, sample_users)
    }

    pub fn all(&self) -> &[Hackathon] {
        &self.hackathons
    }

    pub fn get(&self, id: i64) -> Option<&Hackathon> {
        self.hackathons.iter().find(|h| h.id == id)
    }

    pub fn by_status(&self, status: HackathonStatus) -> Vec<&Hackathon> {
        self.hackathons.iter().filter(|h| h.status == status).collect()
    }

    pub fn sample_users(&self) -> &[User] {
        &self.sample_users
    }

    pub fn random_sample_user(&self) -> Option<&User> {
        self.sample_users.choose(&mut rand::thread_rng())
    }
}

impl Default for HackathonCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
