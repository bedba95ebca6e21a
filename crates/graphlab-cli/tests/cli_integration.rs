use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;

fn graphlab() -> Command {
    let mut cmd = Command::cargo_bin("graphlab").unwrap();
    cmd.env_remove("GRAPHLAB_DEBUG_LOG");
    cmd
}

fn parse_json_output(output: &[u8]) -> Value {
    serde_json::from_slice(output).expect("Failed to parse JSON output")
}

fn run(args: &[&str]) -> Value {
    let output = graphlab()
        .args(args)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let json = parse_json_output(&output);
    assert!(json["success"].as_bool().unwrap());
    json
}

fn strings(value: &Value) -> Vec<String> {
    value
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_str().unwrap().to_string())
        .collect()
}

const TRIANGLE: [&str; 6] = ["--edge", "A-B:1", "--edge", "B-C:2", "--edge", "A-C:5"];

mod stats_tests {
    use super::*;

    #[test]
    fn test_stats() {
        let mut args = TRIANGLE.to_vec();
        args.push("stats");
        let json = run(&args);

        assert_eq!(json["data"]["vertices"], 3);
        assert_eq!(json["data"]["edges"], 3);
        assert_eq!(json["data"]["total_degree"], 6);
        assert_eq!(json["data"]["total_weight"], 8.0);
        assert_eq!(json["data"]["adjacency"][0], "A => [B(1), C(5)]");
    }

    #[test]
    fn test_rejects_duplicate_edge() {
        graphlab()
            .args(["--edge", "A-B", "--edge", "B-A", "stats"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("duplicate"));
    }
}

mod search_tests {
    use super::*;

    const STAR: [&str; 6] = ["--edge", "X-A", "--edge", "X-B", "--edge", "X-C"];

    #[test]
    fn test_bfs_star() {
        let mut args = STAR.to_vec();
        args.extend(["search", "--strategy", "bfs", "--start", "X"]);
        let json = run(&args);

        assert_eq!(strings(&json["data"]["visited"]), vec!["X", "A", "B", "C"]);
        assert_eq!(json["data"]["strategy"], "breadth-first");
        assert_eq!(json["data"]["visits"].as_array().unwrap().len(), 4);
        assert!(json["data"]["found"].is_null());
    }

    #[test]
    fn test_dfs_stops_at_target() {
        let json = run(&[
            "--edge", "A-B", "--edge", "B-C", "--edge", "C-D", "search", "--strategy", "dfs",
            "--stop", "C",
        ]);

        assert_eq!(json["data"]["found"], "C");
        assert_eq!(strings(&json["data"]["visited"]), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_unknown_start_vertex() {
        graphlab()
            .args(["--edge", "A-B", "search", "--start", "Q"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Vertex not found"));
    }
}

mod structure_tests {
    use super::*;

    #[test]
    fn test_components() {
        let json = run(&["--vertex", "Z", "--edge", "A-B", "--edge", "C-D", "components"]);

        assert_eq!(json["data"]["count"], 3);
        assert_eq!(strings(&json["data"]["items"][0]["vertices"]), vec!["Z"]);
        assert_eq!(strings(&json["data"]["items"][1]["vertices"]), vec!["A", "B"]);
    }

    #[test]
    fn test_bipartite() {
        let json = run(&[
            "--edge", "A-B", "--edge", "B-C", "--edge", "C-D", "--edge", "D-A", "bipartite",
        ]);
        assert_eq!(json["data"]["bipartite"], true);
        assert_eq!(strings(&json["data"]["left"]), vec!["A", "C"]);

        let json = run(&["--edge", "A-B", "--edge", "B-C", "--edge", "C-A", "bipartite"]);
        assert_eq!(json["data"]["bipartite"], false);
    }
}

mod path_tree_tests {
    use super::*;

    #[test]
    fn test_dijkstra() {
        let mut args = TRIANGLE.to_vec();
        args.extend(["dijkstra", "--start", "A"]);
        let json = run(&args);

        let c = &json["data"]["vertices"][2];
        assert_eq!(c["vertex"], "C");
        assert_eq!(c["distance"], 3.0);
        assert_eq!(c["previous"], "B");
        assert_eq!(strings(&c["path"]), vec!["A", "B", "C"]);
        assert_eq!(json["data"]["queue"], "priority");
    }

    #[test]
    fn test_dijkstra_unreachable() {
        let json = run(&["--vertex", "Z", "--edge", "A-B", "dijkstra", "--start", "A", "--fifo"]);

        let z = &json["data"]["vertices"][0];
        assert_eq!(z["vertex"], "Z");
        assert!(z["distance"].is_null());
        assert!(z["path"].is_null());
        assert_eq!(json["data"]["queue"], "fifo");
    }

    #[test]
    fn test_mst_both_algorithms() {
        for algorithm in ["kruskal", "prim"] {
            let mut args = TRIANGLE.to_vec();
            args.extend(["mst", "--algorithm", algorithm]);
            let json = run(&args);

            assert_eq!(json["data"]["algorithm"], algorithm);
            assert_eq!(json["data"]["total_weight"], 3.0);
            assert_eq!(json["data"]["edges"].as_array().unwrap().len(), 2);
        }
    }

    #[test]
    fn test_mst_disconnected_fails() {
        graphlab()
            .args(["--edge", "A-B", "--edge", "C-D", "mst"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("disconnected"));
    }
}

#[test]
fn test_completions() {
    graphlab()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("graphlab"));
}
