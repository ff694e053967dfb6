//! Organizational role distribution.

use serde::{Deserialize, Serialize};

use crate::models::{TeacherTeamData, TeamRole};

/// Headcount per team role.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleDistribution {
    pub teacher: usize,
    pub manager: usize,
    pub admin: usize,
}

impl RoleDistribution {
    /// Tallies recognized roles; anything else is ignored.
    pub fn calculate(teachers: &[TeacherTeamData]) -> Self {
        let mut dist = Self::default();
        for role in teachers
            .iter()
            .filter_map(|t| t.role.as_deref())
            .filter_map(TeamRole::parse)
        {
            match role {
                TeamRole::Teacher => dist.teacher += 1,
                TeamRole::Manager => dist.manager += 1,
                TeamRole::Admin => dist.admin += 1,
            }
        }
        dist
    }

    /// Headcount for one role.
    pub fn count(&self, role: TeamRole) -> usize {
        match role {
            TeamRole::Teacher => self.teacher,
            TeamRole::Manager => self.manager,
            TeamRole::Admin => self.admin,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_tally_ignores_unknown() {
        let teachers = vec![
            TeacherTeamData::new("T1").with_role("teacher"),
            TeacherTeamData::new("T2").with_role("Teacher"),
            TeacherTeamData::new("T3").with_role("manager"),
            TeacherTeamData::new("T4").with_role("owner"),
            TeacherTeamData::new("T5"),
        ];
        let dist = RoleDistribution::calculate(&teachers);
        assert_eq!(dist.count(TeamRole::Teacher), 2);
        assert_eq!(dist.count(TeamRole::Manager), 1);
        assert_eq!(dist.count(TeamRole::Admin), 0);
    }
}
