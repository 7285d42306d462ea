mod boj;
mod cses;
mod kattis;

pub use boj::Boj;
pub use cses::Cses;
pub use kattis::{ContestProblem, Kattis};

use strum::{Display, EnumIter, EnumString};

use crate::judge::{Generic, Judge};

/// Every supported judge, by the name used on the command line.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, EnumString, Display, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum JudgeKind {
    #[default]
    Generic,
    Boj,
    Cses,
    Kattis,
}

impl JudgeKind {
    pub fn judge(self) -> &'static dyn Judge {
        match self {
            JudgeKind::Generic => &Generic,
            JudgeKind::Boj => &Boj,
            JudgeKind::Cses => &Cses,
            JudgeKind::Kattis => &Kattis,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn judge_kind_should_parse_from_name() {
        assert_eq!(JudgeKind::from_str("boj").unwrap(), JudgeKind::Boj);
        assert_eq!(JudgeKind::from_str("kattis").unwrap(), JudgeKind::Kattis);
        assert!(JudgeKind::from_str("codeforces").is_err());
        assert_eq!(JudgeKind::Cses.to_string(), "cses");
    }

    #[test]
    fn every_judge_should_have_a_github_directory() {
        for kind in JudgeKind::iter() {
            let judge = kind.judge();
            assert!(!judge.github_directory().is_empty(), "{}", judge.name());
            assert_eq!(judge.github_repo(), "cp-solutions");
        }
    }
}
