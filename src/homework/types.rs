/// Sent when the API reports no submissions since the cursor.
pub const NO_NEW_STATUS: &str = "Нет нового статуса";

/// Reviewer disposition, keyed by the API's `status` code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Approved,
    Reviewing,
    Rejected,
}

impl Verdict {
    #[cfg(test)]
    pub const ALL: [Verdict; 3] = [Verdict::Approved, Verdict::Reviewing, Verdict::Rejected];

    /// `None` for anything outside the known vocabulary.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "approved" => Some(Verdict::Approved),
            "reviewing" => Some(Verdict::Reviewing),
            "rejected" => Some(Verdict::Rejected),
            _ => None,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Verdict::Approved => "approved",
            Verdict::Reviewing => "reviewing",
            Verdict::Rejected => "rejected",
        }
    }

    pub fn text(self) -> &'static str {
        match self {
            Verdict::Approved => "Работа проверена: ревьюеру всё понравилось. Ура!",
            Verdict::Reviewing => "Работа взята на проверку ревьюером.",
            Verdict::Rejected => "Работа проверена: у ревьюера есть замечания.",
        }
    }
}

/// The latest submission, already checked against the vocabulary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub homework_name: String,
    pub verdict: Verdict,
}

impl Submission {
    pub fn status_message(&self) -> String {
        format!(
            "Изменился статус проверки работы \"{}\" {}",
            self.homework_name,
            self.verdict.text()
        )
    }
}
