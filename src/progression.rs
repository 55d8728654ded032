use crate::constants::*;

/// A levelling track. Each has its own cap and experience curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProgressionTrack {
    Base,
    Stat,
    Job,
    Skill,
}

impl ProgressionTrack {
    pub fn all() -> [ProgressionTrack; 4] {
        [
            ProgressionTrack::Base,
            ProgressionTrack::Stat,
            ProgressionTrack::Job,
            ProgressionTrack::Skill,
        ]
    }

    pub fn name(&self) -> &str {
        match self {
            ProgressionTrack::Base => "Base",
            ProgressionTrack::Stat => "Stat",
            ProgressionTrack::Job => "Job",
            ProgressionTrack::Skill => "Skill",
        }
    }

    pub fn max_level(&self) -> u32 {
        match self {
            ProgressionTrack::Base => MAX_LEVEL_BASE,
            ProgressionTrack::Stat => MAX_LEVEL_STAT,
            ProgressionTrack::Job => MAX_LEVEL_JOB,
            ProgressionTrack::Skill => MAX_LEVEL_SKILL,
        }
    }

    /// Growth factor of the experience curve. Skills level by points, so
    /// they have none.
    pub fn exp_growth(&self) -> Option<f64> {
        match self {
            ProgressionTrack::Base => Some(EXP_NEEDED_INC_BASE),
            ProgressionTrack::Stat => Some(EXP_NEEDED_INC_STAT),
            ProgressionTrack::Job => Some(EXP_NEEDED_INC_JOB),
            ProgressionTrack::Skill => None,
        }
    }
}

/// Experience needed to advance from `level` to `level + 1`.
///
/// Level 1 needs [`EXP_NEEDED_FOR_LEVEL2`]; every later level multiplies that
/// by the track's growth factor.
///
/// Returns `None` for level 0, at or above the cap, for the skill track, and
/// for levels whose cost does not fit in a `u64`. Such levels are
/// unreachable.
pub fn exp_needed_for_next_level(track: ProgressionTrack, level: u32) -> Option<u64> {
    let growth = track.exp_growth()?;
    if level == 0 || level >= track.max_level() {
        return None;
    }

    let exponent = i32::try_from(level - 1).ok()?;
    let cost = EXP_NEEDED_FOR_LEVEL2 as f64 * growth.powi(exponent);
    // u64::MAX as f64 rounds up to 2^64
    if cost >= u64::MAX as f64 {
        return None;
    }
    Some(cost as u64)
}

/// Outcome of adding experience to a track.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelProgress {
    pub level: u32,
    pub exp: u64,
    pub levels_gained: u32,
}

impl LevelProgress {
    pub fn reached_cap(&self, track: ProgressionTrack) -> bool {
        self.level >= track.max_level()
    }
}

/// Adds `gained` experience to a track currently at `level` with `exp`
/// stored, levelling up as many times as the experience pays for.
///
/// Experience is discarded once the track reaches its cap. Stored experience
/// beyond `u64::MAX` is clamped. Tracks without an experience curve are
/// returned unchanged.
pub fn apply_exp(track: ProgressionTrack, level: u32, exp: u64, gained: u64) -> LevelProgress {
    if track.exp_growth().is_none() {
        return LevelProgress {
            level,
            exp,
            levels_gained: 0,
        };
    }

    let mut level = level.max(1);
    let mut pool = u128::from(exp) + u128::from(gained);
    let mut levels_gained = 0;

    while let Some(needed) = exp_needed_for_next_level(track, level) {
        let needed = u128::from(needed);
        if pool < needed {
            break;
        }
        pool -= needed;
        level += 1;
        levels_gained += 1;
        tracing::debug!(track = track.name(), level, "level up");
    }

    if level >= track.max_level() {
        pool = 0;
    }

    LevelProgress {
        level,
        exp: u64::try_from(pool).unwrap_or(u64::MAX),
        levels_gained,
    }
}

/// Attribute points granted for gaining `levels` stat levels.
pub fn attribute_points_for_levels(levels: u32) -> u32 {
    levels.saturating_mul(ATTRIBUTE_POINTS_PER_LEVEL)
}

/// Whether an attribute at `value` may take a point while `points` are
/// available to spend.
pub fn can_raise_attribute(value: u32, points: u32) -> bool {
    points > 0 && value < MAX_ATTRIBUTE
}

/// Experience awarded at once, e.g. for a kill.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Experience {
    pub base: u64,
    pub stat: u64,
    pub job: u64,
}

impl Experience {
    pub fn new(base: u64, stat: u64, job: u64) -> Self {
        Self { base, stat, job }
    }
}

/// Levels gained on each experience track by one [`Experience`] award.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LevelUps {
    pub base: u32,
    pub stat: u32,
    pub job: u32,
}

impl LevelUps {
    pub fn any(&self) -> bool {
        self.base > 0 || self.stat > 0 || self.job > 0
    }
}

/// Level and stored experience of one track.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrackState {
    pub level: u32,
    pub exp: u64,
}

impl Default for TrackState {
    fn default() -> Self {
        Self { level: 1, exp: 0 }
    }
}

impl TrackState {
    fn gain(&mut self, track: ProgressionTrack, gained: u64) -> u32 {
        let progress = apply_exp(track, self.level, self.exp, gained);
        self.level = progress.level;
        self.exp = progress.exp;
        progress.levels_gained
    }
}

/// A character's position on the base, stat and job tracks plus the
/// attribute points it has not spent yet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CharacterProgress {
    pub base: TrackState,
    pub stat: TrackState,
    pub job: TrackState,
    pub attribute_points: u32,
}

impl CharacterProgress {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn track(&self, track: ProgressionTrack) -> Option<&TrackState> {
        match track {
            ProgressionTrack::Base => Some(&self.base),
            ProgressionTrack::Stat => Some(&self.stat),
            ProgressionTrack::Job => Some(&self.job),
            ProgressionTrack::Skill => None,
        }
    }

    /// Applies an experience award to all three tracks. Stat levels grant
    /// attribute points.
    pub fn gain_exp(&mut self, xp: Experience) -> LevelUps {
        let ups = LevelUps {
            base: self.base.gain(ProgressionTrack::Base, xp.base),
            stat: self.stat.gain(ProgressionTrack::Stat, xp.stat),
            job: self.job.gain(ProgressionTrack::Job, xp.job),
        };

        let points = attribute_points_for_levels(ups.stat);
        self.attribute_points = self.attribute_points.saturating_add(points);
        ups
    }

    /// Moves one unspent point into `attribute`. Returns false and changes
    /// nothing when no points are left or the attribute is capped.
    pub fn spend_attribute_point(&mut self, attribute: &mut u32) -> bool {
        if !can_raise_attribute(*attribute, self.attribute_points) {
            return false;
        }
        self.attribute_points -= 1;
        *attribute += 1;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_track_caps() {
        assert_eq!(ProgressionTrack::Base.max_level(), 100);
        assert_eq!(ProgressionTrack::Stat.max_level(), 100);
        assert_eq!(ProgressionTrack::Job.max_level(), 60);
        assert_eq!(ProgressionTrack::Skill.max_level(), 10);
    }

    #[test]
    fn test_exp_growth() {
        assert_eq!(ProgressionTrack::Base.exp_growth(), Some(1.75));
        assert_eq!(ProgressionTrack::Stat.exp_growth(), Some(1.5));
        assert_eq!(ProgressionTrack::Job.exp_growth(), Some(2.25));
        assert_eq!(ProgressionTrack::Skill.exp_growth(), None);
    }

    #[test]
    fn test_exp_needed_for_next_level() {
        use ProgressionTrack::*;
        assert_eq!(exp_needed_for_next_level(Base, 1), Some(10));
        assert_eq!(exp_needed_for_next_level(Base, 2), Some(17));
        assert_eq!(exp_needed_for_next_level(Base, 3), Some(30));
        assert_eq!(exp_needed_for_next_level(Stat, 2), Some(15));
        assert_eq!(exp_needed_for_next_level(Stat, 3), Some(22));
        assert_eq!(exp_needed_for_next_level(Job, 2), Some(22));
        assert_eq!(exp_needed_for_next_level(Job, 3), Some(50));
    }

    #[test]
    fn test_exp_needed_edges() {
        use ProgressionTrack::*;
        assert_eq!(exp_needed_for_next_level(Base, 0), None);
        assert_eq!(exp_needed_for_next_level(Base, 100), None);
        assert_eq!(exp_needed_for_next_level(Job, 60), None);
        assert_eq!(exp_needed_for_next_level(Skill, 1), None);
        assert!(exp_needed_for_next_level(Stat, 99).is_some());
    }

    #[test]
    fn test_levels_costing_more_than_u64_are_unreachable() {
        use ProgressionTrack::*;
        assert!(exp_needed_for_next_level(Base, 76).is_some());
        assert_eq!(exp_needed_for_next_level(Base, 77), None);
        assert_eq!(exp_needed_for_next_level(Base, 99), None);
        assert!(exp_needed_for_next_level(Job, 52).is_some());
        assert_eq!(exp_needed_for_next_level(Job, 53), None);
        assert_eq!(exp_needed_for_next_level(Job, 59), None);
    }

    #[test]
    fn test_exp_needed_strictly_grows() {
        for track in [
            ProgressionTrack::Base,
            ProgressionTrack::Stat,
            ProgressionTrack::Job,
        ] {
            let mut prev = 0;
            let mut level = 1;
            while let Some(needed) = exp_needed_for_next_level(track, level) {
                assert!(needed > prev, "{:?} level {}", track, level);
                prev = needed;
                level += 1;
            }
        }
    }

    #[test]
    fn test_apply_exp_no_levelup() {
        let p = apply_exp(ProgressionTrack::Base, 1, 0, 9);
        assert_eq!(
            p,
            LevelProgress {
                level: 1,
                exp: 9,
                levels_gained: 0,
            }
        );
    }

    #[test]
    fn test_apply_exp_multiple_levelups() {
        // 10 for level 2, 17 for level 3, 3 left over
        let p = apply_exp(ProgressionTrack::Base, 1, 5, 25);
        assert_eq!(
            p,
            LevelProgress {
                level: 3,
                exp: 3,
                levels_gained: 2,
            }
        );
    }

    #[test]
    fn test_apply_exp_stops_at_cap() {
        let p = apply_exp(ProgressionTrack::Stat, 99, 0, u64::MAX);
        assert_eq!(p.level, 100);
        assert_eq!(p.exp, 0);
        assert_eq!(p.levels_gained, 1);
        assert!(p.reached_cap(ProgressionTrack::Stat));

        let again = apply_exp(ProgressionTrack::Stat, 100, 0, 1_000);
        assert_eq!(
            again,
            LevelProgress {
                level: 100,
                exp: 0,
                levels_gained: 0,
            }
        );
    }

    #[test]
    fn test_full_pool_cannot_buy_unreachable_level() {
        let p = apply_exp(ProgressionTrack::Base, 85, u64::MAX - 5, 10);
        assert_eq!(p.level, 85);
        assert_eq!(p.levels_gained, 0);
        assert_eq!(p.exp, u64::MAX);
    }

    #[test]
    fn test_overflowing_pool_is_clamped_after_levelling() {
        // Two full pools pay for level 77, then the curve runs past u64
        let p = apply_exp(ProgressionTrack::Base, 76, u64::MAX, u64::MAX);
        assert_eq!(p.level, 77);
        assert_eq!(p.levels_gained, 1);
        assert_eq!(p.exp, u64::MAX);
    }

    #[test]
    fn test_apply_exp_ignores_skill_track() {
        let p = apply_exp(ProgressionTrack::Skill, 2, 4, 1_000);
        assert_eq!(
            p,
            LevelProgress {
                level: 2,
                exp: 4,
                levels_gained: 0,
            }
        );
    }

    #[test]
    fn test_attribute_points() {
        assert_eq!(attribute_points_for_levels(0), 0);
        assert_eq!(attribute_points_for_levels(1), 3);
        assert_eq!(attribute_points_for_levels(99), 297);
        assert_eq!(attribute_points_for_levels(u32::MAX), u32::MAX);
    }

    #[test]
    fn test_can_raise_attribute() {
        assert!(can_raise_attribute(1, 1));
        assert!(can_raise_attribute(99, 3));
        assert!(!can_raise_attribute(100, 3));
        assert!(!can_raise_attribute(150, 3));
        assert!(!can_raise_attribute(1, 0));
    }

    #[test]
    fn test_new_character_progress() {
        let progress = CharacterProgress::new();
        assert_eq!(progress.base, TrackState { level: 1, exp: 0 });
        assert_eq!(progress.stat.level, 1);
        assert_eq!(progress.job.level, 1);
        assert_eq!(progress.attribute_points, 0);
        assert!(progress.track(ProgressionTrack::Skill).is_none());
    }

    #[test]
    fn test_gain_exp_levels_each_track() {
        let mut progress = CharacterProgress::new();
        let ups = progress.gain_exp(Experience::new(27, 15, 5));

        assert_eq!(
            ups,
            LevelUps {
                base: 2,
                stat: 1,
                job: 0,
            }
        );
        assert!(ups.any());
        assert_eq!(progress.base, TrackState { level: 3, exp: 0 });
        assert_eq!(progress.stat, TrackState { level: 2, exp: 5 });
        assert_eq!(progress.job, TrackState { level: 1, exp: 5 });
        assert_eq!(progress.attribute_points, 3);
    }

    #[test]
    fn test_gain_nothing() {
        let mut progress = CharacterProgress::new();
        let ups = progress.gain_exp(Experience::default());
        assert!(!ups.any());
        assert_eq!(progress, CharacterProgress::new());
    }

    #[test]
    fn test_spend_attribute_point() {
        let mut progress = CharacterProgress::new();
        progress.attribute_points = 2;
        let mut strength = 98;

        assert!(progress.spend_attribute_point(&mut strength));
        assert_eq!(strength, 99);
        assert_eq!(progress.attribute_points, 1);

        assert!(progress.spend_attribute_point(&mut strength));
        assert_eq!(strength, 100);
        assert_eq!(progress.attribute_points, 0);

        // Capped and out of points
        assert!(!progress.spend_attribute_point(&mut strength));
        assert_eq!(strength, 100);
    }

    #[test]
    fn test_spend_attribute_point_without_points() {
        let mut progress = CharacterProgress::new();
        let mut agility = 10;
        assert!(!progress.spend_attribute_point(&mut agility));
        assert_eq!(agility, 10);
    }

    #[test]
    fn test_spend_attribute_point_on_capped_attribute() {
        let mut progress = CharacterProgress::new();
        progress.attribute_points = 5;
        let mut vitality = 100;
        assert!(!progress.spend_attribute_point(&mut vitality));
        assert_eq!(progress.attribute_points, 5);
    }
}
