use crate::graph::StatementGraph;
use crate::predict::{Predictor, DEFAULT_MAX_OUTPUT};
use proptest::prelude::*;

/// Short statements over a small alphabet, so prefixes are shared often.
fn statements() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-d]{1,8}", 1..24)
}

fn trained(statements: &[String]) -> StatementGraph {
    let mut graph = StatementGraph::new();
    graph.extend(statements);
    graph
}

proptest! {
    /// Property 1: Root passage count
    /// Every non-empty statement passes through the root exactly once.
    #[test]
    fn prop_root_counts_statements(input in statements()) {
        let graph = trained(&input);
        prop_assert_eq!(graph.statements(), input.len() as u64);
    }

    /// Property 2: Total frequency
    /// For a prefix-free corpus the aggregate frequency is the total length.
    #[test]
    fn prop_total_frequency_is_total_length(input in statements()) {
        // A terminator outside the alphabet makes every statement end at a leaf.
        let terminated: Vec<String> = input.iter().map(|s| format!("{s}.")).collect();
        let graph = trained(&terminated);

        let total: u64 = terminated.iter().map(|s| s.chars().count() as u64).sum();
        prop_assert_eq!(graph.total_frequency(graph.root()), total);
    }

    /// Property 3: Parent dominates child
    /// A node's passage count is at least that of any of its children, and
    /// children are always created after their parent.
    #[test]
    fn prop_parent_dominates_child(input in statements()) {
        let graph = trained(&input);

        for node in graph.nodes.values() {
            for edge in node.children() {
                let child = graph.node(edge.target()).unwrap();
                prop_assert!(node.passage_count() >= child.passage_count());
                prop_assert!(node.id() < child.id());
            }
        }
    }

    /// Property 4: Leaves count terminations
    /// The passage counts of all leaves sum to the number of statements that
    /// are not a strict prefix of another statement.
    #[test]
    fn prop_leaves_count_terminations(input in statements()) {
        let graph = trained(&input);

        let leaf_total: u64 = graph
            .nodes
            .values()
            .filter(|node| node.is_leaf())
            .map(|node| node.passage_count())
            .sum();
        let terminating = input
            .iter()
            .filter(|s| {
                !input
                    .iter()
                    .any(|other| other.len() > s.len() && other.starts_with(s.as_str()))
            })
            .count() as u64;
        prop_assert_eq!(leaf_total, terminating);
    }

    /// Property 5: Node count
    /// One node per distinct non-empty prefix, plus the root.
    #[test]
    fn prop_node_count_is_distinct_prefixes(input in statements()) {
        let graph = trained(&input);

        let mut prefixes = ahash::AHashSet::new();
        for s in &input {
            for end in 1..=s.len() {
                prefixes.insert(&s[..end]);
            }
        }
        prop_assert_eq!(graph.node_count(), prefixes.len() + 1);
    }

    /// Property 6: Trained statements are supported
    /// A trained statement is echoed unchanged and reported as supported.
    #[test]
    fn prop_trained_statement_supported(input in statements()) {
        let graph = trained(&input);

        for statement in &input {
            let result = graph.infer(statement);
            prop_assert!(result.supported, "{} should be supported", statement);
            let expected_prefix = format!("{statement}...");
            prop_assert!(result.text.starts_with(&expected_prefix));
        }
    }

    /// Property 7: Output cap
    /// No inference ever emits more than the configured number of characters.
    #[test]
    fn prop_output_is_capped(
        input in prop::collection::vec("[a-c]{1,60}", 1..8),
        prompt in "[a-d]{0,50}",
        cap in 1usize..50,
    ) {
        let graph = trained(&input);

        prop_assert!(graph.infer(&prompt).text.chars().count() <= DEFAULT_MAX_OUTPUT);
        let capped = Predictor::new().with_max_output(cap).infer(&graph, &prompt);
        prop_assert!(capped.text.chars().count() <= cap);
    }

    /// Property 8: Echo
    /// Output always starts with the prompt's first characters.
    #[test]
    fn prop_output_echoes_prompt(input in statements(), prompt in "[a-e]{0,12}") {
        let graph = trained(&input);
        let result = graph.infer(&prompt);

        let echoed = result.text.split("...").next().unwrap_or("");
        prop_assert!(prompt.starts_with(echoed));
        if result.supported {
            prop_assert_eq!(echoed, prompt.as_str());
        }
    }
}

/// Bolero fuzz test: No panics on arbitrary statements and prompts
#[cfg(test)]
#[test]
fn fuzz_no_panic() {
    bolero::check!().with_type::<Vec<u8>>().for_each(|input| {
        let lines: Vec<String> = input
            .split(|&b| b == b'\n')
            .map(|line| line.iter().map(|&b| b as char).collect())
            .collect();

        let mut graph = StatementGraph::new();
        graph.extend(&lines);

        for line in &lines {
            let result = graph.infer(line);
            assert!(result.text.chars().count() <= DEFAULT_MAX_OUTPUT);
        }

        let _ = graph.compress(input.len());
        for line in &lines {
            let _ = graph.infer(line);
        }
    });
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn test_two_branch_example() {
        let graph = trained(&["ab".to_string(), "ac".to_string()]);

        assert_eq!(graph.statements(), 2);
        assert_eq!(graph.total_frequency(graph.root()), 4);
        assert_eq!(graph.node_count(), 4);

        let a = graph.node_by_id(1).unwrap();
        assert_eq!(a.passage_count(), 2);
        assert!(graph.node_by_id(2).unwrap().is_leaf());
        assert!(graph.node_by_id(3).unwrap().is_leaf());
    }

    #[test]
    fn test_prefix_statements_count_terminal_passage() {
        let graph = trained(&["ab".to_string(), "abc".to_string()]);
        // root 2 + a 2 + b 2 (one terminal passage); the c-leaf is not counted.
        assert_eq!(graph.total_frequency(graph.root()), 6);
    }
}
