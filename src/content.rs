//! Deck content: typed, bilingual page copy embedded at compile time.
//!
//! Content lives in `locales/<lang>.json` and is deserialized once at
//! startup. Statistic values are display strings (`"$1,200"`, `"25-35%"`);
//! their numeric magnitude is derived on demand by the extractor rather than
//! stored alongside, so chart widths and count-ups always agree with the
//! rendered text.

use std::str::FromStr;

use serde::Deserialize;

use crate::error::{LapachoError, Result};
use crate::numeric::extract_numeric;

const EN_JSON: &str = include_str!("../locales/en.json");
const ES_JSON: &str = include_str!("../locales/es.json");

/// Supported content languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Locale {
    /// English.
    En,
    /// Spanish.
    Es,
}

impl Locale {
    /// Language tag, e.g. `"en"`.
    pub fn tag(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Es => "es",
        }
    }

    /// The embedded JSON document for this locale.
    fn source(self) -> &'static str {
        match self {
            Locale::En => EN_JSON,
            Locale::Es => ES_JSON,
        }
    }
}

impl FromStr for Locale {
    type Err = LapachoError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "en" => Ok(Locale::En),
            "es" => Ok(Locale::Es),
            other => Err(LapachoError::unknown_locale(other)),
        }
    }
}

/// A single statistic: a display value with its caption.
#[derive(Debug, Clone, Deserialize)]
pub struct Stat {
    /// Display string, possibly decorated (`"$550"`, `"10%"`, `"BB+"`).
    pub value: String,
    /// Short caption under the value.
    pub label: String,
    /// One-line elaboration.
    pub desc: String,
}

/// One row of a comparison chart.
#[derive(Debug, Clone, Deserialize)]
pub struct ChartRow {
    /// Entity being compared, e.g. a country name.
    pub country: String,
    /// Display value shown at the right edge of the row.
    pub value: String,
    /// Note rendered inside the bar.
    pub note: String,
    /// Whether this row is the highlighted one.
    #[serde(default)]
    pub highlight: bool,
}

impl ChartRow {
    /// Numeric magnitude of this row's value, for bar sizing.
    ///
    /// Rows whose value carries no digits size at zero and rely on the
    /// chart's visibility floor.
    pub fn magnitude(&self) -> f64 {
        extract_numeric(&self.value).map(|p| p.numeric).unwrap_or(0.0)
    }
}

/// A comparison chart: several rows ranked against a fixed maximum.
#[derive(Debug, Clone, Deserialize)]
pub struct Chart {
    /// Chart heading.
    pub title: String,
    /// Small caption under the heading (source, unit).
    pub label: String,
    /// Upper bound for bar scaling, fixed per chart by the author.
    pub max_value: f64,
    /// Rows, in presentation order.
    pub rows: Vec<ChartRow>,
}

/// A dated milestone on the opportunity timeline.
#[derive(Debug, Clone, Deserialize)]
pub struct Milestone {
    /// When, as display text.
    pub date: String,
    /// What happened.
    pub event: String,
}

/// A titled blurb (service, benefit, principle).
#[derive(Debug, Clone, Deserialize)]
pub struct Blurb {
    /// Heading.
    pub title: String,
    /// Body text.
    pub desc: String,
}

/// Labels for the five pages, used by the navigation bar.
#[derive(Debug, Clone, Deserialize)]
pub struct NavLabels {
    /// Home page label.
    pub home: String,
    /// About page label.
    pub about: String,
    /// Opportunity page label.
    pub opportunity: String,
    /// Why-Paraguay page label.
    pub why_paraguay: String,
    /// Contact page label.
    pub contact: String,
}

/// Home page copy.
#[derive(Debug, Clone, Deserialize)]
pub struct HomePage {
    /// Small uppercase label above the headline.
    pub tagline: String,
    /// Main headline.
    pub headline: String,
    /// Supporting sentence under the headline.
    pub subtitle: String,
    /// Firm introduction paragraph.
    pub who_we_are: String,
    /// Service blurbs.
    pub services: Vec<Blurb>,
    /// Animated firm statistics.
    pub stats: Vec<Stat>,
    /// Closing call-to-action heading.
    pub closing_title: String,
    /// Closing call-to-action body.
    pub closing_description: String,
}

/// About page copy.
#[derive(Debug, Clone, Deserialize)]
pub struct AboutPage {
    /// Section label.
    pub tagline: String,
    /// Page heading.
    pub title: String,
    /// Body paragraphs.
    pub body: Vec<String>,
    /// Firm principles.
    pub principles: Vec<Blurb>,
    /// Section label above the leadership block.
    pub team_label: String,
    /// Leadership blurbs: partner name with role, then a short bio.
    pub team: Vec<Blurb>,
}

/// Opportunity page copy.
#[derive(Debug, Clone, Deserialize)]
pub struct OpportunityPage {
    /// Section label.
    pub tagline: String,
    /// Page heading.
    pub title: String,
    /// Overview paragraph.
    pub overview: String,
    /// Bullet points on the opportunity.
    pub points: Vec<String>,
    /// Engagement blurbs.
    pub services: Vec<Blurb>,
    /// Engagement timeline.
    pub timeline: Vec<Milestone>,
}

/// Why-Paraguay page copy: macro stats plus the comparison charts.
#[derive(Debug, Clone, Deserialize)]
pub struct WhyParaguayPage {
    /// Section label.
    pub tagline: String,
    /// Page heading.
    pub title: String,
    /// Overview paragraph.
    pub overview: String,
    /// Animated macro statistics.
    pub stats: Vec<Stat>,
    /// Country comparison charts.
    pub charts: Vec<Chart>,
    /// Additional advantages, rendered as a list.
    pub advantages: Vec<String>,
}

/// Labels for the contact form fields and its outcome messages.
#[derive(Debug, Clone, Deserialize)]
pub struct FormLabels {
    /// Name field label.
    pub name: String,
    /// Email field label.
    pub email: String,
    /// Company field label.
    pub company: String,
    /// Country field label.
    pub country: String,
    /// Message field label.
    pub message: String,
    /// Submit button label.
    pub submit: String,
    /// In-flight label shown while a submission is queued.
    pub sending: String,
    /// Banner shown after a delivered submission.
    pub success: String,
    /// Banner shown after a failed submission.
    pub error: String,
}

/// Contact page copy.
#[derive(Debug, Clone, Deserialize)]
pub struct ContactPage {
    /// Section label.
    pub tagline: String,
    /// Page heading.
    pub title: String,
    /// Supporting sentence under the heading.
    pub subtitle: String,
    /// Form field labels and outcome messages.
    pub form: FormLabels,
    /// Firm email address.
    pub email: String,
    /// Firm phone number.
    pub phone: String,
    /// Firm street address.
    pub address: String,
    /// Options for the country selector.
    pub countries: Vec<String>,
}

/// The full deck for one locale.
#[derive(Debug, Clone, Deserialize)]
pub struct Deck {
    /// Navigation bar labels.
    pub nav: NavLabels,
    /// Home page.
    pub home: HomePage,
    /// About page.
    pub about: AboutPage,
    /// Opportunity page.
    pub opportunity: OpportunityPage,
    /// Why-Paraguay page.
    pub why_paraguay: WhyParaguayPage,
    /// Contact page.
    pub contact: ContactPage,
}

impl Deck {
    /// Load the embedded deck for a locale.
    pub fn load(locale: Locale) -> Result<Self> {
        let deck = serde_json::from_str(locale.source())?;
        Ok(deck)
    }
}
