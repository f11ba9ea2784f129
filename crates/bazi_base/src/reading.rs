//! Templated chart readings and favourable-element suggestions.

use serde::{Deserialize, Serialize};

use crate::balance::Strength;
use crate::branch::Branch;
use crate::chart::Chart;
use crate::element::Element;
use crate::locale::Locale;
use crate::luck::Gender;
use crate::pattern::Pattern;
use crate::stem::Stem;

/// Lucky direction, colours and numbers plus noble-person zodiacs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestions {
    pub directions: Vec<String>,
    pub colors: Vec<String>,
    pub numbers: Vec<String>,
    pub noble_people: Vec<String>,
}

/// Career, wealth, marriage and health readings for a chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartReading {
    pub career: String,
    pub wealth: String,
    pub marriage: String,
    pub health: String,
    pub suggestions: Suggestions,
}

impl ChartReading {
    /// Chinese readings.
    pub fn for_chart(chart: &Chart, strength: Strength, pattern: Pattern, gender: Gender) -> Self {
        Self::for_chart_in(chart, strength, pattern, gender, Locale::Zh)
    }

    pub fn for_chart_in(
        chart: &Chart,
        strength: Strength,
        pattern: Pattern,
        gender: Gender,
        locale: Locale,
    ) -> Self {
        let day_master = chart.day_master();
        Self {
            career: career_reading(day_master.element(), strength, pattern, locale),
            wealth: wealth_reading(strength, locale).to_string(),
            marriage: marriage_reading(gender, locale).to_string(),
            health: health_reading(locale).to_string(),
            suggestions: suggestions_for(day_master, locale),
        }
    }
}

/// Career reading built from the day-master element, strength and pattern.
pub fn career_reading(
    day: Element,
    strength: Strength,
    pattern: Pattern,
    locale: Locale,
) -> String {
    match locale {
        Locale::Zh => format!(
            "日主{}{}，{}成格。{}宜把握大运吉年积极拓展事业。",
            day.symbol(),
            strength.short_chinese(),
            pattern.chinese_name(),
            pattern.description(Locale::Zh)
        ),
        Locale::En => {
            let band = match strength {
                Strength::Strong => "strong",
                Strength::Weak => "weak",
                Strength::Balanced => "balanced",
            };
            format!(
                "{} day master, {band}, forming the {}. {} Make the most of favourable luck years to grow your career.",
                day.name(),
                pattern.name(),
                pattern.description(Locale::En)
            )
        }
    }
}

pub const fn wealth_reading(strength: Strength, locale: Locale) -> &'static str {
    match (strength, locale) {
        (Strength::Strong, Locale::Zh) => {
            "身强能担财，具备良好的求财能力。正财稳定，偏财亦有机缘。宜正道经营，中年后财运渐入佳境。"
        }
        (Strength::Weak, Locale::Zh) => {
            "身弱财重，需借助贵人和团队之力求财。不宜独立创业，合伙经营更佳。理财宜稳健保守。"
        }
        (Strength::Balanced, Locale::Zh) => {
            "身财两停，财运平顺。正财为主，偏财为辅。宜脚踏实地，稳步积累财富。"
        }
        (Strength::Strong, Locale::En) => {
            "A strong day master can carry wealth and earns well. Regular income is stable and windfalls also come. Build honestly; fortunes improve after middle age."
        }
        (Strength::Weak, Locale::En) => {
            "A weak day master faces heavy wealth and earns best with the help of mentors and a team. Partnerships suit better than going alone; manage money conservatively."
        }
        (Strength::Balanced, Locale::En) => {
            "Self and wealth are in balance and income flows smoothly. Regular income leads and windfalls follow. Stay practical and accumulate steadily."
        }
    }
}

pub const fn marriage_reading(gender: Gender, locale: Locale) -> &'static str {
    match (gender, locale) {
        (Gender::Male, Locale::Zh) => {
            "配偶宫稳固，婚姻根基扎实。配偶性格务实，持家有方。建议在25-35岁间择良缘。"
        }
        (Gender::Female, Locale::Zh) => {
            "配偶宫安稳，婚姻运势平顺。配偶忠厚可靠，家庭责任感强。30岁前后为最佳婚配时机。"
        }
        (Gender::Male, Locale::En) => {
            "The spouse palace is firm and the marriage well grounded. The spouse is practical and runs the home well. Ages 25-35 favour finding a partner."
        }
        (Gender::Female, Locale::En) => {
            "The spouse palace is settled and married life runs smoothly. The spouse is loyal and devoted to family. Around age 30 is the best time to marry."
        }
    }
}

pub const fn health_reading(locale: Locale) -> &'static str {
    match locale {
        Locale::Zh => {
            "五行需注意调和，宜养成良好生活习惯。流年逢冲克之年更需关注身体状况，建议定期体检。"
        }
        Locale::En => {
            "Keep the five elements in harmony and build good habits. Watch your health closely in clashing years and have regular check-ups."
        }
    }
}

/// Favourable direction for an element.
pub const fn direction(element: Element, locale: Locale) -> &'static str {
    match (element, locale) {
        (Element::Metal, Locale::Zh) => "西方",
        (Element::Wood, Locale::Zh) => "东方",
        (Element::Water, Locale::Zh) => "北方",
        (Element::Fire, Locale::Zh) => "南方",
        (Element::Earth, Locale::Zh) => "中央",
        (Element::Metal, Locale::En) => "West",
        (Element::Wood, Locale::En) => "East",
        (Element::Water, Locale::En) => "North",
        (Element::Fire, Locale::En) => "South",
        (Element::Earth, Locale::En) => "Centre",
    }
}

/// Favourable colours for an element.
pub const fn colors(element: Element, locale: Locale) -> &'static [&'static str] {
    match (element, locale) {
        (Element::Metal, Locale::Zh) => &["白色", "金色"],
        (Element::Wood, Locale::Zh) => &["绿色"],
        (Element::Water, Locale::Zh) => &["黑色", "蓝色"],
        (Element::Fire, Locale::Zh) => &["红色"],
        (Element::Earth, Locale::Zh) => &["黄色"],
        (Element::Metal, Locale::En) => &["white", "gold"],
        (Element::Wood, Locale::En) => &["green"],
        (Element::Water, Locale::En) => &["black", "blue"],
        (Element::Fire, Locale::En) => &["red"],
        (Element::Earth, Locale::En) => &["yellow"],
    }
}

/// Lucky numbers for an element.
pub const fn numbers(element: Element) -> [u8; 2] {
    match element {
        Element::Metal => [4, 9],
        Element::Wood => [3, 8],
        Element::Water => [1, 6],
        Element::Fire => [2, 7],
        Element::Earth => [5, 0],
    }
}

/// Noble-person (tian yi) branches for a day stem.
pub const fn noble_branches(day_master: Stem) -> [Branch; 2] {
    match day_master {
        Stem::Jia | Stem::Wu | Stem::Geng => [Branch::Chou, Branch::Wei],
        Stem::Yi | Stem::Ji => [Branch::Zi, Branch::Shen],
        Stem::Bing | Stem::Ding => [Branch::Hai, Branch::You],
        Stem::Xin => [Branch::Wu, Branch::Yin],
        Stem::Ren | Stem::Gui => [Branch::Si, Branch::Mao],
    }
}

/// Suggestions keyed on the day master.
pub fn suggestions_for(day_master: Stem, locale: Locale) -> Suggestions {
    let element = day_master.element();
    let noble_people = noble_branches(day_master)
        .iter()
        .map(|b| match locale {
            Locale::Zh => format!("属{}", b.zodiac()),
            Locale::En => b.zodiac_english().to_string(),
        })
        .collect();
    Suggestions {
        directions: vec![direction(element, locale).to_string()],
        colors: colors(element, locale).iter().map(|c| c.to_string()).collect(),
        numbers: numbers(element).iter().map(|n| n.to_string()).collect(),
        noble_people,
    }
}
