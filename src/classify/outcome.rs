/// Classification assigned to a single test-case row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Row is out of scope for the automation suite.
    Ignore,
    /// In scope, but exercises unauthorized / permission-less users.
    IgnoreUnauthorized,
    /// In scope, but edits an already-drafted PO.
    IgnoreDraftEdit,
    /// In scope, but varies browsers or screen sizes.
    IgnoreBrowserMatrix,
    /// Covered by the automated suite.
    Covered,
}

impl Outcome {
    /// The exact label text written into the result column.
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Ignore => "Ignore",
            Outcome::IgnoreUnauthorized => {
                "Ignore (Script does not test unauthorized users)"
            }
            Outcome::IgnoreDraftEdit => {
                "Ignore (Script does not test editing Draft POs)"
            }
            Outcome::IgnoreBrowserMatrix => {
                "Ignore (Script does not test multiple browsers or screen sizes)"
            }
            Outcome::Covered => {
                "Covered: Automated by Playwright script for Basic Information tab and related navigation/validation."
            }
        }
    }
}
