use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct CrewMember {
    #[allow(dead_code)]
    pub id: i64,
    #[allow(dead_code)]
    pub movie_id: i64,
    pub name: String,
    pub role: String,
}

impl CrewMember {
    /// Display form used by the crew aggregate: `"Name (Role)"`.
    pub fn billing(&self) -> String {
        format!("{} ({})", self.name, self.role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn billing_includes_role_in_parentheses() {
        let member = CrewMember {
            id: 1,
            movie_id: 1,
            name: "Denis Villeneuve".to_string(),
            role: "Director".to_string(),
        };
        assert_eq!(member.billing(), "Denis Villeneuve (Director)");
    }
}
