use super::*;
use filters::SkipSet;
use graph::{AccessPath, MemberGraph, Node, NodeError, NodeId};

fn paths(matches: &Matches) -> Vec<String> {
    matches.iter().map(ToString::to_string).collect()
}

fn scenario() -> MemberGraph {
    let mut graph = MemberGraph::new();
    let root = graph.root();
    let alpha = graph.add_namespace(root, "alpha");
    graph.add_namespace(root, "alpha_beta");
    graph.add_value(root, "gamma", "int");
    graph.add_value(alpha, "token_x", "function");
    graph
}

fn run(term: &str, graph: MemberGraph, options: SearchOptions, skip: SkipSet) -> Matches {
    Walker::new(term, graph.into_root(), options, skip)
        .run(&mut NoProgress)
        .expect("walk succeeds")
}

#[test]
fn finds_nested_leaf() {
    let options = SearchOptions::new().skip_filtering(false).max_depth(2);
    let matches = run("token", scenario(), options, SkipSet::default());
    assert_eq!(paths(&matches), ["alpha.token_x"]);
}

#[test]
fn root_is_never_a_match() {
    let options = SearchOptions::new().skip_filtering(false);
    let matches = run("", MemberGraph::new(), options, SkipSet::default());
    assert!(matches.is_empty());
}

#[test]
fn empty_term_matches_every_visible_member() {
    let options = SearchOptions::new().skip_filtering(false);
    let matches = run("", scenario(), options, SkipSet::default());
    assert_eq!(
        paths(&matches),
        ["alpha", "alpha.token_x", "alpha_beta", "gamma"]
    );
}

#[test]
fn private_members_are_ignored() {
    let mut graph = MemberGraph::new();
    let root = graph.root();
    let hidden = graph.add_namespace(root, "_internal");
    graph.add_value(hidden, "token", "function");
    graph.add_value(root, "_token", "function");

    let options = SearchOptions::new().skip_filtering(false);
    assert!(run("token", graph, options, SkipSet::default()).is_empty());
}

#[test]
fn skipped_names_are_neither_matched_nor_entered() {
    let skip = SkipSet::build(["alpha"], "token");
    let matches = run("token", scenario(), SearchOptions::new(), skip);
    assert!(matches.is_empty());
}

#[test]
fn skip_set_is_ignored_when_filtering_is_disabled() {
    let skip = SkipSet::build(["alpha"], "token");
    let options = SearchOptions::new().skip_filtering(false);
    let matches = run("token", scenario(), options, skip);
    assert_eq!(paths(&matches), ["alpha.token_x"]);
}

#[test]
fn matching_tests_only_the_last_name() {
    let mut graph = MemberGraph::new();
    let root = graph.root();
    let token = graph.add_namespace(root, "tokens");
    graph.add_value(token, "split", "function");

    let options = SearchOptions::new().skip_filtering(false);
    assert_eq!(paths(&run("token", graph, options, SkipSet::default())), ["tokens"]);
}

#[test]
fn case_insensitive_matching_lowercases_both_sides() {
    let mut graph = MemberGraph::new();
    let root = graph.root();
    graph.add_value(root, "Tokenizer", "class");
    graph.add_value(root, "token", "function");

    let sensitive = SearchOptions::new().skip_filtering(false);
    let matches = run("Token", graph.clone(), sensitive, SkipSet::default());
    assert_eq!(paths(&matches), ["Tokenizer"]);

    let insensitive = sensitive.case_sensitive(false);
    let matches = run("Token", graph, insensitive, SkipSet::default());
    assert_eq!(paths(&matches), ["Tokenizer", "token"]);
}

#[test]
fn zero_depth_lists_only_root_members() {
    let options = SearchOptions::new().skip_filtering(false).max_depth(0);
    assert!(run("token", scenario(), options, SkipSet::default()).is_empty());

    let matches = run("alpha", scenario(), options, SkipSet::default());
    assert_eq!(paths(&matches), ["alpha", "alpha_beta"]);
}

#[test]
fn progress_sink_sees_matches_in_order() {
    let mut seen = Vec::new();
    let mut sink = |path: &AccessPath| seen.push(path.to_string());
    let options = SearchOptions::new().skip_filtering(false);
    let matches = Walker::new("alpha", scenario().into_root(), options, SkipSet::default())
        .run(&mut sink)
        .expect("walk succeeds");
    assert_eq!(seen, paths(&matches));
}

#[test]
fn progress_sink_is_silent_when_disabled() {
    let mut calls = 0usize;
    let mut sink = |_: &AccessPath| calls += 1;
    let options = SearchOptions::new().skip_filtering(false).emit_progress(false);
    let matches = Walker::new("alpha", scenario().into_root(), options, SkipSet::default())
        .run(&mut sink)
        .expect("walk succeeds");
    assert_eq!(matches.len(), 2);
    assert_eq!(calls, 0);
}

#[test]
fn stats_count_containers_and_skips() {
    let skip = SkipSet::build(["gamma"], "token");
    let (matches, stats) = Walker::new("token", scenario().into_root(), SearchOptions::new(), skip)
        .run_with_stats(&mut NoProgress)
        .expect("walk succeeds");
    assert_eq!(matches.len(), 1);
    assert_eq!(
        stats,
        WalkStats {
            nodes_visited: 3,
            children_skipped: 1,
            max_depth_reached: 1,
            revisits_avoided: 0,
        }
    );
}

#[test]
fn matches_serialize_as_nested_arrays() {
    let options = SearchOptions::new().skip_filtering(false);
    let matches = run("token", scenario(), options, SkipSet::default());
    let json = serde_json::to_string(&matches).expect("serialize");
    assert_eq!(json, r#"[["alpha","token_x"]]"#);
}

#[test]
fn matches_expose_collection_accessors() {
    let options = SearchOptions::new().skip_filtering(false);
    let matches = run("alpha", scenario(), options, SkipSet::default());
    assert!(matches.contains(&AccessPath::from_segments(["alpha_beta"])));
    assert!(!matches.contains(&AccessPath::from_segments(["gamma"])));
    let borrowed: Vec<&AccessPath> = (&matches).into_iter().collect();
    assert_eq!(borrowed.len(), 2);
    let owned = matches.into_vec();
    assert_eq!(owned[0].segments(), ["alpha"]);
}

/// Hand-built graph whose nodes fail in controlled ways.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Scripted {
    Root,
    Unlistable,
    Phantom,
}

impl Node for Scripted {
    fn member_names(&self) -> Result<Vec<String>, NodeError> {
        match self {
            Self::Root => Ok(vec!["phantom".to_owned(), "unlistable".to_owned()]),
            Self::Unlistable => Err("members unavailable".into()),
            Self::Phantom => Ok(vec!["vanished".to_owned()]),
        }
    }

    fn member(&self, name: &str) -> Option<Self> {
        match (self, name) {
            (Self::Root, "phantom") => Some(Self::Phantom),
            (Self::Root, "unlistable") => Some(Self::Unlistable),
            _ => None,
        }
    }

    fn is_container(&self) -> bool {
        true
    }

    fn identity(&self) -> NodeId {
        NodeId::new(*self as usize)
    }
}

#[test]
fn unresolvable_member_aborts_the_walk() {
    let options = SearchOptions::new().skip_filtering(false);
    let error = Walker::new("zzz", Scripted::Root, options, SkipSet::default())
        .run(&mut NoProgress)
        .expect_err("phantom member cannot be resolved");
    let SearchError::Resolve(error) = error else {
        panic!("expected a resolve error, got {error:?}");
    };
    assert_eq!(error.segment(), "vanished");
    assert_eq!(error.path().to_string(), "phantom.vanished");
}

#[test]
fn enumeration_failure_aborts_the_walk() {
    let skip = SkipSet::build(["phantom"], "zzz");
    let error = Walker::new("zzz", Scripted::Root, SearchOptions::new(), skip)
        .run(&mut NoProgress)
        .expect_err("unlistable member aborts");
    let SearchError::Enumeration(error) = error else {
        panic!("expected an enumeration error, got {error:?}");
    };
    assert_eq!(error.path().to_string(), "unlistable");
    assert!(error.to_string().contains("members unavailable"));
}

#[test]
fn enumeration_failure_is_not_reached_beyond_depth() {
    let skip = SkipSet::build(["phantom"], "zzz");
    let options = SearchOptions::new().max_depth(0);
    let matches = Walker::new("unlist", Scripted::Root, options, skip)
        .run(&mut NoProgress)
        .expect("container below the ceiling is never listed");
    assert_eq!(paths(&matches), ["unlistable"]);
}
