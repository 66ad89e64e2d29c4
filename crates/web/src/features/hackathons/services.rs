use storage::{
    HackathonCatalog,
    models::{Hackathon, HackathonStatus},
};

/// Catalog entries, optionally narrowed to one status tab
pub fn list_hackathons(
    catalog: &HackathonCatalog,
    status: Option<HackathonStatus>,
) -> Vec<Hackathon> {
    match status {
        Some(status) => catalog.by_status(status).into_iter().cloned().collect(),
        None => catalog.all().to_vec(),
    }
}

pub fn get_hackathon(catalog: &HackathonCatalog, id: i64) -> Option<Hackathon> {
    catalog.get(id).cloned()
}
