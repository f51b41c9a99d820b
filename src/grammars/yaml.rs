//! NESTML grammar: the YAML block/flow syntax via tree-sitter-yaml.

use crate::grammars::Grammar;
use crate::kind::NodeKind;

/// Grammar name carried by NESTML nodes.
pub const NAME: &str = "nestml";

/// NESTML documents parsed with tree-sitter-yaml.
pub struct NestmlGrammar;

impl Grammar for NestmlGrammar {
    fn name(&self) -> &'static str {
        NAME
    }

    fn language(&self) -> tree_sitter::Language {
        tree_sitter_yaml::LANGUAGE.into()
    }

    fn classify(&self, kind: &str) -> NodeKind {
        NodeKind::from_yaml(kind)
    }
}
