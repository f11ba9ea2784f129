//! Structural pattern (ge ju) classification.
//!
//! The pattern is named after the Ten-God relation of the month branch's
//! primary hidden stem to the day master. Relations without a pattern of
//! their own resolve to the Direct-Officer Pattern.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::chart::Chart;
use crate::locale::Locale;
use crate::stem::Stem;
use crate::ten_god::{TenGod, ten_god};

/// The 12 recognised structural patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Pattern {
    DirectOfficer,
    SevenKillings,
    DirectSeal,
    IndirectSeal,
    DirectWealth,
    IndirectWealth,
    EatingGod,
    HurtingOfficer,
    Companion,
    RivalWealth,
    ThrivingProsperity,
    GoatBlade,
}

/// All 12 patterns in traditional listing order.
pub const ALL_PATTERNS: [Pattern; 12] = [
    Pattern::DirectOfficer,
    Pattern::SevenKillings,
    Pattern::DirectSeal,
    Pattern::IndirectSeal,
    Pattern::DirectWealth,
    Pattern::IndirectWealth,
    Pattern::EatingGod,
    Pattern::HurtingOfficer,
    Pattern::Companion,
    Pattern::RivalWealth,
    Pattern::ThrivingProsperity,
    Pattern::GoatBlade,
];

/// Pattern used when the relation has no pattern of its own.
pub const DEFAULT_PATTERN: Pattern = Pattern::DirectOfficer;

impl Pattern {
    /// Chinese name, e.g. "正官格".
    pub const fn chinese_name(self) -> &'static str {
        match self {
            Self::DirectOfficer => "正官格",
            Self::SevenKillings => "七杀格",
            Self::DirectSeal => "正印格",
            Self::IndirectSeal => "偏印格",
            Self::DirectWealth => "正财格",
            Self::IndirectWealth => "偏财格",
            Self::EatingGod => "食神格",
            Self::HurtingOfficer => "伤官格",
            Self::Companion => "比肩格",
            Self::RivalWealth => "劫财格",
            Self::ThrivingProsperity => "建禄格",
            Self::GoatBlade => "羊刃格",
        }
    }

    /// English name, e.g. "Direct-Officer Pattern".
    pub const fn name(self) -> &'static str {
        match self {
            Self::DirectOfficer => "Direct-Officer Pattern",
            Self::SevenKillings => "Seven-Killings Pattern",
            Self::DirectSeal => "Direct-Seal Pattern",
            Self::IndirectSeal => "Indirect-Seal Pattern",
            Self::DirectWealth => "Direct-Wealth Pattern",
            Self::IndirectWealth => "Indirect-Wealth Pattern",
            Self::EatingGod => "Eating-God Pattern",
            Self::HurtingOfficer => "Hurting-Officer Pattern",
            Self::Companion => "Companion Pattern",
            Self::RivalWealth => "Rival-Wealth Pattern",
            Self::ThrivingProsperity => "Thriving-Prosperity Pattern",
            Self::GoatBlade => "Goat-Blade Pattern",
        }
    }

    /// Name in the requested language.
    pub const fn localized_name(self, locale: Locale) -> &'static str {
        match locale {
            Locale::Zh => self.chinese_name(),
            Locale::En => self.name(),
        }
    }

    /// The pattern named after a Ten-God relation, if one exists.
    pub const fn for_relation(relation: TenGod) -> Option<Pattern> {
        match relation {
            TenGod::Companion => Some(Self::Companion),
            TenGod::RivalWealth => Some(Self::RivalWealth),
            TenGod::IndirectSeal => Some(Self::IndirectSeal),
            TenGod::DirectSeal => Some(Self::DirectSeal),
            TenGod::EatingGod => Some(Self::EatingGod),
            TenGod::HurtingOfficer => Some(Self::HurtingOfficer),
            // 偏官格 is not a listed pattern
            TenGod::IndirectOfficer => None,
            TenGod::DirectOfficer => Some(Self::DirectOfficer),
            TenGod::IndirectWealth => Some(Self::IndirectWealth),
            TenGod::DirectWealth => Some(Self::DirectWealth),
        }
    }

    /// Fixed one-line description.
    pub const fn description(self, locale: Locale) -> &'static str {
        match locale {
            Locale::Zh => match self {
                Self::DirectOfficer => "正官透出，为人正直守信，适合从政或管理工作，一生多得贵人相助。",
                Self::SevenKillings => "七杀有制，性格刚强果断，具有领导才能，适合开拓性事业。",
                Self::DirectSeal => "印星得力，学识渊博，品性温和，适合学术研究或教育工作。",
                Self::IndirectSeal => "偏印透出，思维独特，富有创造力，适合技术或艺术领域。",
                Self::DirectWealth => "正财旺相，勤劳务实，财运稳定，适合经商或理财工作。",
                Self::IndirectWealth => "偏财透出，善于投资，社交广泛，适合销售或金融行业。",
                Self::EatingGod => "食神泄秀，才华横溢，性格温和，适合文艺或餐饮行业。",
                Self::HurtingOfficer => "伤官生财，聪明机智，口才出众，适合演艺或法律行业。",
                Self::Companion => "比肩帮身，独立自主，适合合伙创业或自由职业。",
                Self::RivalWealth => "劫财透出，竞争意识强，适合销售或体育竞技。",
                Self::ThrivingProsperity => "月令建禄，根基稳固，一生平顺，适合稳定职业。",
                Self::GoatBlade => "羊刃当令，性格刚毅，宜从武职或执法部门。",
            },
            Locale::En => match self {
                Self::DirectOfficer => "The Direct Officer shows: upright and trustworthy, suited to public service or management, often helped by benefactors.",
                Self::SevenKillings => "The Seven Killings are restrained: firm and decisive with a talent for leadership, suited to pioneering ventures.",
                Self::DirectSeal => "The Seal star is strong: learned and gentle, suited to research or teaching.",
                Self::IndirectSeal => "The Indirect Seal shows: an original and creative mind, suited to technical or artistic fields.",
                Self::DirectWealth => "Direct Wealth thrives: hardworking and practical with steady income, suited to business or finance.",
                Self::IndirectWealth => "Indirect Wealth shows: good at investing and well connected, suited to sales or finance.",
                Self::EatingGod => "The Eating God releases talent: gifted and mild-tempered, suited to the arts or hospitality.",
                Self::HurtingOfficer => "The Hurting Officer generates wealth: quick-witted and eloquent, suited to performance or law.",
                Self::Companion => "Companions support the self: independent, suited to partnerships or freelance work.",
                Self::RivalWealth => "Rival Wealth shows: strongly competitive, suited to sales or sport.",
                Self::ThrivingProsperity => "The month holds the day master's prosperity: a stable foundation and a smooth life, suited to steady careers.",
                Self::GoatBlade => "The Goat Blade commands the month: resolute, suited to military or law-enforcement work.",
            },
        }
    }
}

/// How a chart's pattern was reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternAnalysis {
    /// Primary hidden stem of the month branch.
    pub month_stem: Stem,
    /// Its relation to the day master.
    pub relation: TenGod,
    pub pattern: Pattern,
    /// True when `relation` had no pattern and the default was used.
    pub fallback: bool,
}

/// Classify the chart and report whether the default was substituted.
pub fn pattern_analysis(chart: &Chart) -> PatternAnalysis {
    let month_stem = chart.month.branch().primary_stem();
    let relation = ten_god(chart.day_master(), month_stem);
    let (pattern, fallback) = match Pattern::for_relation(relation) {
        Some(p) => (p, false),
        None => {
            debug!(
                relation = relation.name(),
                month = %chart.month,
                "no pattern for month relation, using {}",
                DEFAULT_PATTERN.name()
            );
            (DEFAULT_PATTERN, true)
        }
    };
    PatternAnalysis {
        month_stem,
        relation,
        pattern,
        fallback,
    }
}

/// Structural pattern of the chart.
pub fn classify_pattern(chart: &Chart) -> Pattern {
    pattern_analysis(chart).pattern
}
