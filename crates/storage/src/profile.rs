use tracing::info;

use crate::error::{Result, StorageError};
use crate::models::{Team, TeamCode, Theme, User};
use crate::store::{JsonStore, StoreKey};

/// Signed-in user, their teams and the theme preference.
///
/// Loaded once from the [`JsonStore`]; every mutation writes the changed key
/// back immediately.
#[derive(Debug)]
pub struct Profile {
    store: JsonStore,
    user: Option<User>,
    teams: Vec<Team>,
    theme: Theme,
}

impl Profile {
    pub async fn load(store: JsonStore) -> Self {
        let user: Option<User> = store.load_or(StoreKey::User, None).await;
        let teams: Vec<Team> = store.load_or(StoreKey::Teams, Vec::new()).await;
        let theme = store.load_or(StoreKey::Theme, Theme::default()).await;

        info!(
            "Loaded profile from {} (signed in: {}, {} team(s))",
            store.root().display(),
            user.is_some(),
            teams.len()
        );

        Self {
            store,
            user,
            teams,
            theme,
        }
    }

    pub fn current_user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    pub fn team(&self, team_id: i64) -> Option<&Team> {
        self.teams.iter().find(|t| t.id == team_id)
    }

    pub fn team_for_hackathon(&self, hackathon_id: i64) -> Option<&Team> {
        self.teams.iter().find(|t| t.hackathon_id == hackathon_id)
    }

    pub async fn sign_in(&mut self, user: User) -> Result<&User> {
        self.store.save(StoreKey::User, &Some(&user)).await?;
        info!("Signed in as {} ({})", user.name, user.id);
        Ok(self.user.insert(user))
    }

    /// Clears the user and the team list.
    pub async fn sign_out(&mut self) -> Result<()> {
        self.store.save(StoreKey::User, &Option::<User>::None).await?;
        self.store.remove(StoreKey::Teams).await?;
        self.user = None;
        self.teams.clear();
        info!("Signed out");
        Ok(())
    }

    pub async fn toggle_theme(&mut self) -> Result<Theme> {
        let theme = self.theme.toggled();
        self.store.save(StoreKey::Theme, &theme).await?;
        self.theme = theme;
        Ok(theme)
    }

    fn next_team_id(&self) -> i64 {
        let now = chrono::Utc::now().timestamp_millis();
        let last = self.teams.iter().map(|t| t.id).max().unwrap_or(i64::MIN);
        now.max(last.saturating_add(1))
    }

    /// Writes `teams` to the store, then adopts it. On error the in-memory
    /// list is left as it was.
    async fn commit_teams(&mut self, teams: Vec<Team>) -> Result<()> {
        self.store.save(StoreKey::Teams, &teams).await?;
        self.teams = teams;
        Ok(())
    }

    /// Creates a team for `hackathon_id` with the signed-in user as its only member.
    pub async fn create_team(&mut self, hackathon_id: i64, name: &str) -> Result<Team> {
        let creator = self.user.clone().ok_or(StorageError::NotSignedIn)?;
        let name = name.trim();
        if name.is_empty() {
            return Err(StorageError::EmptyTeamName);
        }

        let team = Team {
            id: self.next_team_id(),
            name: name.to_string(),
            members: vec![creator],
            team_code: TeamCode::generate().into_string(),
            hackathon_id,
        };

        let mut teams = self.teams.clone();
        teams.push(team.clone());
        self.commit_teams(teams).await?;

        info!(
            "Team \"{}\" created for hackathon {} (code {})",
            team.name, hackathon_id, team.team_code
        );
        Ok(team)
    }

    /// Adds the signed-in user to the team of `hackathon_id` whose code matches.
    /// Joining a team the user is already on returns it unchanged.
    pub async fn join_team(&mut self, hackathon_id: i64, code: &str) -> Result<Team> {
        let user = self.user.clone().ok_or(StorageError::NotSignedIn)?;

        let index = self
            .teams
            .iter()
            .position(|t| t.hackathon_id == hackathon_id && TeamCode::matches(&t.team_code, code))
            .ok_or(StorageError::TeamNotFound)?;

        if self.teams[index].has_member(user.id) {
            return Ok(self.teams[index].clone());
        }

        let mut teams = self.teams.clone();
        teams[index].members.push(user);
        let joined = teams[index].clone();
        self.commit_teams(teams).await?;

        info!("Joined team \"{}\"", joined.name);
        Ok(joined)
    }
}
