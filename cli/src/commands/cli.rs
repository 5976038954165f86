use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand};
use scout_core::api::{CliError, FilterState, SortKey};

#[derive(Parser, Debug, Clone)]
#[command(name = "scout", version, about = "Influencer discovery against the social statistics API")]
pub struct Args {
    /// Config file. Defaults to ./config.toml, then ~/.scout/config.toml.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Serve the ingest and query gateways over HTTP.
    Serve(HttpServerArgs),
    /// Fetch the fixed crawl query once and store the raw response.
    Ingest,
    /// Run a search and print one page of results.
    Search(SearchArgs),
    /// Print the query parameters a filter translates to, without calling out.
    Params(FilterArgs),
}

#[derive(ClapArgs, Debug, Clone)]
pub struct HttpServerArgs {
    #[arg(long)]
    pub host: Option<String>,

    #[arg(long)]
    pub port: Option<u16>,

    #[arg(long)]
    pub session_id: Option<String>,
}

#[derive(ClapArgs, Debug, Clone)]
pub struct SearchArgs {
    #[command(flatten)]
    pub filter: FilterArgs,

    /// Print the page as JSON instead of cards.
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

#[derive(ClapArgs, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Full filter as JSON, inline or `@path/to/filter.json`. Flags below override it.
    #[arg(long)]
    pub filter_json: Option<String>,

    #[arg(long)]
    pub page: Option<u32>,

    #[arg(long)]
    pub per_page: Option<u32>,

    /// One of -score, -usersCount, -avgViews, -avgER, -qualityScore.
    #[arg(long, allow_hyphen_values = true)]
    pub sort: Option<String>,

    #[arg(long)]
    pub tags: Option<String>,

    #[arg(long)]
    pub locations: Option<String>,

    #[arg(long)]
    pub genders: Option<String>,

    /// Age buckets, e.g. `18_21,21_24`.
    #[arg(long, value_delimiter = ',')]
    pub ages: Vec<String>,

    /// Platform codes, e.g. `INST,FB`.
    #[arg(long, value_delimiter = ',')]
    pub social_types: Vec<String>,

    #[arg(long)]
    pub min_followers: Option<String>,

    #[arg(long)]
    pub max_followers: Option<String>,

    #[arg(long)]
    pub min_er: Option<String>,

    #[arg(long)]
    pub max_er: Option<String>,

    #[arg(long)]
    pub min_quality: Option<u8>,

    #[arg(long)]
    pub max_quality: Option<u8>,

    #[arg(long, default_value_t = false)]
    pub verified: bool,

    #[arg(long, default_value_t = false)]
    pub contact_email: bool,

    #[arg(long)]
    pub audience_locations: Option<String>,

    #[arg(long)]
    pub audience_genders: Option<String>,

    #[arg(long, value_delimiter = ',')]
    pub audience_ages: Vec<String>,

    #[arg(long, default_value_t = false)]
    pub track_total: bool,
}

impl FilterArgs {
    pub fn to_filter(&self) -> Result<FilterState, CliError> {
        let mut filter = match self.filter_json.as_deref() {
            Some(src) => parse_filter_json(src)?,
            None => FilterState::default(),
        };

        if let Some(page) = self.page {
            filter.page = page;
        }
        if let Some(per_page) = self.per_page {
            filter.per_page = per_page;
        }
        if let Some(sort) = self.sort.as_deref() {
            filter.sort = sort
                .parse::<SortKey>()
                .map_err(|e| CliError::Command(e.to_string()))?;
        }

        set_text(&mut filter.tags, &self.tags);
        set_text(&mut filter.locations, &self.locations);
        set_text(&mut filter.genders, &self.genders);
        set_text(&mut filter.audience_locations, &self.audience_locations);
        set_text(&mut filter.audience_genders, &self.audience_genders);
        set_text(&mut filter.min_users_count, &self.min_followers);
        set_text(&mut filter.max_users_count, &self.max_followers);
        set_text(&mut filter.min_er, &self.min_er);
        set_text(&mut filter.max_er, &self.max_er);

        for code in &self.ages {
            filter.ages.insert(code);
        }
        for code in &self.social_types {
            filter.social_types.insert(code);
        }
        for code in &self.audience_ages {
            filter.audience_ages.insert(code);
        }

        if let Some(min) = self.min_quality {
            filter.min_quality_score = min;
        }
        if let Some(max) = self.max_quality {
            filter.max_quality_score = max;
        }

        filter.is_verified |= self.verified;
        filter.is_contact_email |= self.contact_email;
        filter.track_total |= self.track_total;
        Ok(filter)
    }
}

fn set_text(field: &mut String, value: &Option<String>) {
    if let Some(v) = value {
        *field = v.clone();
    }
}

fn parse_filter_json(src: &str) -> Result<FilterState, CliError> {
    let text = match src.strip_prefix('@') {
        Some(path) => std::fs::read_to_string(path)
            .map_err(|e| CliError::Command(format!("read filter file {path}: {e}")))?,
        None => src.to_string(),
    };
    serde_json::from_str(&text).map_err(|e| CliError::Command(format!("invalid filter json: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn parse(argv: &[&str]) -> Args {
        Args::parse_from(std::iter::once("scout").chain(argv.iter().copied()))
    }

    #[test]
    fn search_flags_build_a_filter() {
        let args = parse(&[
            "search",
            "--sort",
            "-usersCount",
            "--social-types",
            "INST,FB",
            "--ages",
            "18_21",
            "--min-followers",
            "1000",
            "--contact-email",
        ]);
        let Commands::Search(search) = args.command else {
            panic!("expected search");
        };
        let filter = search.filter.to_filter().unwrap();

        assert_eq!(filter.sort, SortKey::Followers);
        assert_eq!(filter.social_types.joined().as_deref(), Some("INST,FB"));
        assert_eq!(filter.ages.joined().as_deref(), Some("18_21"));
        assert_eq!(filter.min_users_count, "1000");
        assert!(filter.is_contact_email);
        assert!(!filter.is_verified);
        assert_eq!(filter.page, 1);
    }

    #[test]
    fn trailing_commas_and_empty_lists_add_no_codes() {
        let args = parse(&["params", "--social-types", "INST,", "--ages", ""]);
        let Commands::Params(filter_args) = args.command else {
            panic!("expected params");
        };
        let filter = filter_args.to_filter().unwrap();
        let params = scout_core::api::build_query(&filter);

        assert_eq!(params.get("socialTypes"), Some("INST"));
        assert!(!params.contains("ages"));
        assert!(params.iter().all(|(_, v)| !v.is_empty()));
    }

    #[test]
    fn flags_override_filter_json() {
        let args = FilterArgs {
            filter_json: Some(r#"{"page":3,"tags":"travel","isVerified":true}"#.into()),
            tags: Some("food".into()),
            ..FilterArgs::default()
        };
        let filter = args.to_filter().unwrap();

        assert_eq!(filter.page, 3);
        assert_eq!(filter.tags, "food");
        assert!(filter.is_verified);
    }

    #[test]
    fn unknown_sort_is_an_error() {
        let args = FilterArgs {
            sort: Some("-followers".into()),
            ..FilterArgs::default()
        };
        assert!(args.to_filter().is_err());
    }

    #[test]
    fn global_config_flag_after_subcommand() {
        let args = parse(&["ingest", "--config", "/tmp/scout.toml"]);
        assert_eq!(args.config, Some(PathBuf::from("/tmp/scout.toml")));
        assert!(matches!(args.command, Commands::Ingest));
    }
}
