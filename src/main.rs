//! nestml-lang: query NESTML editor support from the command line.
#![allow(clippy::multiple_crate_versions)]

use clap::{Parser, Subcommand, ValueEnum};
use nestml_lang::config::Config;
use nestml_lang::document::Document;
use nestml_lang::error::{Error, Result};
use nestml_lang::grammars::markdown::MarkdownGrammar;
use nestml_lang::grammars::yaml::NestmlGrammar;
use nestml_lang::grammars::Grammar;
use nestml_lang::language::complete::CompletionResult;
use nestml_lang::language::fold::FoldRange;
use nestml_lang::language::highlight::HighlightSpan;
use nestml_lang::mixed;
use nestml_lang::tree::{NodeId, SyntaxTree};
use nestml_lang::{FrontmatterSupport, LanguageSupport};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "nestml-lang")]
#[command(about = "Editor language support for NESTML", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Treat files as a NESTML front section followed by a body
    #[arg(long, global = true)]
    frontmatter: bool,

    /// Grammar for the body of a frontmatter document
    #[arg(long, global = true, value_enum, default_value_t = BodyGrammar::Markdown)]
    body: BodyGrammar,

    /// Columns per indentation level (overrides nestml-lang.toml)
    #[arg(long, global = true)]
    unit: Option<usize>,

    /// Tab stop width (overrides nestml-lang.toml)
    #[arg(long, global = true)]
    tab_size: Option<usize>,
}

#[derive(Subcommand)]
enum Command {
    /// Indentation for a new line inserted at a byte offset
    Indent {
        /// File to query
        path: PathBuf,
        /// Byte offset of the line break
        #[arg(long)]
        offset: usize,
    },
    /// Show how a document splits into front section and body
    Split {
        /// File to split
        path: PathBuf,
    },
    /// List foldable ranges
    Folds {
        /// File to fold
        path: PathBuf,
    },
    /// List highlighted ranges
    Highlight {
        /// File to highlight
        path: PathBuf,
    },
    /// Keyword completions at a byte offset
    Complete {
        /// File to query
        path: PathBuf,
        /// Byte offset of the cursor
        #[arg(long)]
        offset: usize,
        /// Offer candidates even without a word before the cursor
        #[arg(long)]
        explicit: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum BodyGrammar {
    Markdown,
    Nestml,
}

impl BodyGrammar {
    fn grammar(self) -> Arc<dyn Grammar> {
        match self {
            Self::Markdown => Arc::new(MarkdownGrammar),
            Self::Nestml => Arc::new(NestmlGrammar),
        }
    }
}

enum Support {
    Plain(LanguageSupport),
    Frontmatter(FrontmatterSupport),
}

impl Support {
    fn parse(&self, text: &str) -> SyntaxTree {
        match self {
            Self::Plain(support) => support.parse(text),
            Self::Frontmatter(support) => support.parse(text),
        }
    }

    fn indentation(&self, tree: &SyntaxTree, doc: &Document, pos: usize) -> Option<usize> {
        match self {
            Self::Plain(support) => support.indentation(tree, doc, pos),
            Self::Frontmatter(support) => support.indentation(tree, doc, pos),
        }
    }

    fn folds(&self, tree: &SyntaxTree, doc: &Document) -> Vec<FoldRange> {
        match self {
            Self::Plain(support) => support.folds(tree, doc),
            Self::Frontmatter(support) => support.folds(tree, doc),
        }
    }

    fn highlights(&self, tree: &SyntaxTree) -> Vec<HighlightSpan> {
        match self {
            Self::Plain(support) => support.highlights(tree),
            Self::Frontmatter(support) => support.highlights(tree),
        }
    }

    fn complete(
        &self,
        tree: &SyntaxTree,
        doc: &Document,
        pos: usize,
        explicit: bool,
    ) -> Option<CompletionResult> {
        match self {
            Self::Plain(support) => support.complete(doc, pos, explicit),
            Self::Frontmatter(support) => support.complete(tree, doc, pos, explicit),
        }
    }
}

#[derive(Serialize)]
struct IndentReport {
    offset: usize,
    indent: Option<usize>,
}

#[derive(Serialize)]
struct RegionReport<'a> {
    from: usize,
    to: usize,
    text: &'a str,
    grammar: Option<&'static str>,
    root: Option<&'static str>,
}

#[derive(Serialize)]
struct SplitReport<'a> {
    front: Option<RegionReport<'a>>,
    body: Option<RegionReport<'a>>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let mut cfg = Config::load();

    // Override config with command line args
    if let Some(unit) = args.unit {
        cfg.indent_unit = unit;
    }
    if let Some(tab_size) = args.tab_size {
        cfg.tab_size = tab_size;
    }

    let json = run(&args, cfg)?;
    println!("{json}");
    Ok(())
}

fn run(args: &Args, cfg: Config) -> Result<String> {
    let support = if args.frontmatter {
        Support::Frontmatter(FrontmatterSupport::new(args.body.grammar(), cfg)?)
    } else {
        Support::Plain(LanguageSupport::new(cfg))
    };

    match &args.command {
        Command::Indent { path, offset } => {
            let doc = read(path)?;
            check_offset(&doc, *offset)?;
            let tree = support.parse(doc.text());
            let report = IndentReport {
                offset: *offset,
                indent: support.indentation(&tree, &doc, *offset),
            };
            Ok(serde_json::to_string_pretty(&report)?)
        }
        Command::Split { path } => {
            let doc = read(path)?;
            let parser = mixed::nestml_frontmatter(args.body.grammar())?;
            let tree = parser.parse(doc.text());
            let report = SplitReport {
                front: mixed::front_section(&tree).map(|id| region_report(&tree, &doc, id)),
                body: mixed::body(&tree).map(|id| region_report(&tree, &doc, id)),
            };
            Ok(serde_json::to_string_pretty(&report)?)
        }
        Command::Folds { path } => {
            let doc = read(path)?;
            let tree = support.parse(doc.text());
            Ok(serde_json::to_string_pretty(&support.folds(&tree, &doc))?)
        }
        Command::Highlight { path } => {
            let doc = read(path)?;
            let tree = support.parse(doc.text());
            Ok(serde_json::to_string_pretty(&support.highlights(&tree))?)
        }
        Command::Complete {
            path,
            offset,
            explicit,
        } => {
            let doc = read(path)?;
            check_offset(&doc, *offset)?;
            let tree = support.parse(doc.text());
            let result = support.complete(&tree, &doc, *offset, *explicit);
            Ok(serde_json::to_string_pretty(&result)?)
        }
    }
}

fn read(path: &Path) -> Result<Document> {
    Ok(Document::new(std::fs::read_to_string(path)?))
}

fn check_offset(doc: &Document, offset: usize) -> Result<()> {
    if offset > doc.len() || !doc.text().is_char_boundary(offset) {
        return Err(Error::OffsetOutOfRange {
            offset,
            len: doc.len(),
        });
    }
    Ok(())
}

fn region_report<'a>(tree: &SyntaxTree, doc: &'a Document, id: NodeId) -> RegionReport<'a> {
    let node = tree.node(id);
    let root = mixed::mounted(tree, id).map(|root| tree.node(root));
    RegionReport {
        from: node.from,
        to: node.to,
        text: doc.slice(node.from, node.to),
        grammar: root.map(|root| root.grammar),
        root: root.map(|root| root.name),
    }
}
