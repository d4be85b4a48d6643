use fluent_bundle::{FluentArgs, FluentBundle, FluentResource};
use tracing::warn;
use unic_langid::LanguageIdentifier;

use crate::game::types::{Outcome, Statistics};

const EN: &str = include_str!("en.ftl");
const DE: &str = include_str!("de.ftl");

/// Fluent-based internationalization.
pub struct I18n {
    bundle: FluentBundle<FluentResource>,
    lang: &'static str,
}

impl I18n {
    /// Pick the bundle matching the system language, falling back to English.
    pub fn detect() -> Self {
        let sys_lang = sys_locale::get_locale()
            .unwrap_or_else(|| "en".to_string())
            .to_lowercase();
        Self::for_language(&sys_lang)
    }

    /// Bundle for a language tag such as `de-DE`; unknown tags get English.
    pub fn for_language(tag: &str) -> Self {
        let lang = if tag.to_lowercase().starts_with("de") {
            "de"
        } else {
            "en"
        };
        let source = if lang == "de" { DE } else { EN };

        let langid: LanguageIdentifier = lang.parse().unwrap_or_default();
        let mut bundle = FluentBundle::new(vec![langid]);
        bundle.set_use_isolating(false);
        match FluentResource::try_new(source.to_string()) {
            Ok(resource) => {
                if let Err(errors) = bundle.add_resource(resource) {
                    warn!(lang, ?errors, "conflicting messages in bundle");
                }
            }
            Err((_, errors)) => warn!(lang, ?errors, "failed to parse bundle"),
        }

        Self { bundle, lang }
    }

    /// Get a translated message by its identifier.
    pub fn t(&self, id: &str) -> String {
        self.format(id, None)
    }

    /// Get a translated message with arguments.
    pub fn t_args(&self, id: &str, args: &FluentArgs) -> String {
        self.format(id, Some(args))
    }

    /// The game-over line for a finished game, `None` while it is running.
    pub fn outcome_message(&self, outcome: &Outcome) -> Option<String> {
        match outcome {
            Outcome::InProgress => None,
            Outcome::Won { player, .. } => {
                let mut args = FluentArgs::new();
                args.set("player", player.to_string());
                Some(self.t_args("player-wins", &args))
            }
            Outcome::Drawn => Some(self.t("draw")),
        }
    }

    pub fn statistics_message(&self, stats: &Statistics) -> String {
        let mut args = FluentArgs::new();
        args.set("human", stats.human_wins);
        args.set("ai", stats.ai_wins);
        args.set("draws", stats.draws);
        self.t_args("stats", &args)
    }

    pub fn current_language(&self) -> &str {
        self.lang
    }

    fn format(&self, id: &str, args: Option<&FluentArgs>) -> String {
        let msg = match self.bundle.get_message(id) {
            Some(m) => m,
            None => return id.to_string(),
        };
        let pattern = match msg.value() {
            Some(p) => p,
            None => return id.to_string(),
        };
        let mut errors = vec![];
        self.bundle
            .format_pattern(pattern, args, &mut errors)
            .to_string()
    }
}
