use clap::{ArgAction, Parser, Subcommand, ValueEnum, ValueHint};
use wpq_db::{CategoryOrder, FieldList, PostOrder};

#[derive(Parser)]
#[command(
    author,
    version,
    about,
    help_template = "{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}",
    arg_required_else_help = true
)]
pub struct Args {
    /// Set output verbosity
    #[arg(short = 'v', long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress outputs
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output as json
    #[arg(short, long, global = true)]
    pub json: bool,

    /// Disable colors in output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Provide custom config file
    #[arg(short, long, global = true, value_hint = ValueHint::FilePath)]
    pub config: Option<String>,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum TermKind {
    Category,
    Tag,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List published posts
    #[clap(name = "posts", visible_alias = "p")]
    Posts {
        /// Show a single post
        #[arg(long)]
        id: Option<u64>,

        /// Comma-separated columns to show, e.g. `id,post_title`
        #[arg(short, long)]
        fields: Option<FieldList>,

        /// Show at most this many posts
        #[arg(short, long, allow_negative_numbers = true)]
        limit: Option<i64>,

        /// Skip this many posts
        #[arg(long, requires = "limit", allow_negative_numbers = true)]
        offset: Option<i64>,

        /// Show the newest posts first, at most this many
        #[arg(long, allow_negative_numbers = true)]
        latest: Option<i64>,

        /// Column that decides what is newest
        #[arg(long, requires = "latest", default_value_t = PostOrder::PostDate)]
        order: PostOrder,
    },

    /// Print a meta value of a post
    #[command(arg_required_else_help = true)]
    Meta {
        /// Meta key, e.g. `_thumbnail_id`
        #[arg(required = true)]
        key: String,

        #[arg(required = true)]
        post_id: u64,
    },

    /// List the terms of a post
    #[command(arg_required_else_help = true)]
    Terms {
        #[arg(required = true)]
        post_id: u64,

        /// Only show terms of this taxonomy
        #[arg(short, long)]
        kind: Option<TermKind>,
    },

    /// Count the comments of a post
    #[command(arg_required_else_help = true)]
    Comments {
        #[arg(required = true)]
        post_id: u64,
    },

    /// List every category
    #[clap(name = "categories", visible_alias = "cats")]
    Categories {
        /// Sort column
        #[arg(long, default_value_t = CategoryOrder::TermId)]
        order: CategoryOrder,
    },

    /// Generate default config
    #[clap(name = "defconfig")]
    DefConfig,

    /// View env
    Env,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_is_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_parse_posts() {
        let args = Args::try_parse_from([
            "wpq", "-vv", "posts", "--fields", "id,post_title", "--latest", "5", "--order",
            "post_modified",
        ])
        .unwrap();

        assert_eq!(args.verbose, 2);
        match args.command {
            Commands::Posts {
                fields,
                latest,
                order,
                limit,
                ..
            } => {
                assert_eq!(fields.map(|f| f.len()), Some(2));
                assert_eq!(latest, Some(5));
                assert_eq!(order, PostOrder::PostModified);
                assert_eq!(limit, None);
            }
            _ => panic!("expected posts"),
        }
    }

    #[test]
    fn test_offset_requires_limit() {
        assert!(Args::try_parse_from(["wpq", "posts", "--offset", "3"]).is_err());
        assert!(Args::try_parse_from(["wpq", "posts", "--limit", "2", "--offset", "3"]).is_ok());
    }

    #[test]
    fn test_negative_limit_reaches_the_query() {
        let args = Args::try_parse_from(["wpq", "posts", "--limit", "-1"]).unwrap();
        assert!(matches!(args.command, Commands::Posts { limit: Some(-1), .. }));
    }

    #[test]
    fn test_rejects_unknown_order() {
        assert!(Args::try_parse_from(["wpq", "categories", "--order", "random()"]).is_err());
        assert!(Args::try_parse_from(["wpq", "posts", "--latest", "1", "--order", "x"]).is_err());
    }

    #[test]
    fn test_parse_terms_kind() {
        let args = Args::try_parse_from(["wpq", "terms", "4", "--kind", "tag"]).unwrap();
        assert!(matches!(
            args.command,
            Commands::Terms {
                post_id: 4,
                kind: Some(TermKind::Tag)
            }
        ));
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let args = Args::try_parse_from(["wpq", "comments", "1", "--json", "--no-color"]).unwrap();
        assert!(args.json);
        assert!(args.no_color);
    }
}
