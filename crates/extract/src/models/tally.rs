/// Appearances and goals for one side of a career (club or national team).
///
/// Goal tables encode a goalkeeper's conceded goals as negative numbers, so a
/// single signed total decides whether the goals were scored or conceded. At
/// most one of `scored` and `conceded` is ever non-zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Tally {
    pub caps: u32,
    pub scored: u32,
    pub conceded: u32,
}
impl Tally {
    /// Splits a signed goal total into scored or conceded.
    pub fn from_signed(caps: u32, goals: i64) -> Self {
        let goals_abs = u32::try_from(goals.unsigned_abs()).unwrap_or(u32::MAX);
        match goals < 0 {
            true => Self { caps, scored: 0, conceded: goals_abs },
            false => Self { caps, scored: goals_abs, conceded: 0 },
        }
    }

    /// Reconciles two independently parsed sources for the same statistic.
    ///
    /// Caps take the larger source. If either goal total is negative, the
    /// goals are conceded and the most negative total wins; otherwise the
    /// larger total is taken as goals scored.
    pub fn reconcile((caps_a, goals_a): (u32, i64), (caps_b, goals_b): (u32, i64)) -> Self {
        let caps = caps_a.max(caps_b);
        match goals_a < 0 || goals_b < 0 {
            true => Self::from_signed(caps, goals_a.min(goals_b)),
            false => Self::from_signed(caps, goals_a.max(goals_b)),
        }
    }
}
