use serde::{Deserialize, Serialize};

/// The two account kinds. Each one owns exactly one dashboard.
///
/// Forms and serialized values use the English literals `student` and
/// `faculty`. The Japanese labels `学生` and `教員` are not accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Faculty,
}

impl Role {
    pub const ALL: [Role; 2] = [Role::Student, Role::Faculty];

    /// Literal accepted in the registration form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Faculty => "faculty",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Role::Student => "Student",
            Role::Faculty => "Faculty",
        }
    }

    /// Path of the dashboard this role lands on after login.
    pub fn home_path(&self) -> &'static str {
        match self {
            Role::Student => "/student",
            Role::Faculty => "/faculty",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "student" => Ok(Role::Student),
            "faculty" => Ok(Role::Faculty),
            other => Err(format!("{:?} is not a valid role", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_role_literals() {
        assert_eq!("student".parse::<Role>(), Ok(Role::Student));
        assert_eq!(" faculty ".parse::<Role>(), Ok(Role::Faculty));
    }

    #[test]
    fn test_parse_role_is_case_sensitive() {
        assert!("Student".parse::<Role>().is_err());
        assert!("admin".parse::<Role>().is_err());
        assert!("".parse::<Role>().is_err());
        assert!("学生".parse::<Role>().is_err());
        assert!("教員".parse::<Role>().is_err());
    }

    #[test]
    fn test_home_paths_differ() {
        assert_eq!(Role::Student.home_path(), "/student");
        assert_eq!(Role::Faculty.home_path(), "/faculty");
        for role in Role::ALL {
            assert_eq!(role.to_string().parse::<Role>(), Ok(role));
        }
    }
}
