use codegauge::{analyze_source, FileReport, MetricsAnalyzer, Thresholds};
use indoc::indoc;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn report(source: &str) -> FileReport {
    FileReport::analyze("Test.java", source, &MetricsAnalyzer::default())
}

#[test]
fn test_empty_input() {
    let report = report("");
    let m = report.metrics;

    assert_eq!(m.loc, 1);
    assert_eq!(m.empty_lines, 1);
    assert_eq!(m.comment_lines, 0);
    assert_eq!(m.comment_to_code_ratio, 0);
    assert_eq!(m.cyclomatic_complexity, 1);
    assert_eq!(m.class_count, 0);
    assert_eq!(m.method_count, 0);
    assert_eq!(m.memory_allocation_count, 0);
    assert_eq!(m.duplicate_block_count, 0);
    assert_eq!(
        report.score_entries(),
        vec![
            ("DocumentationScore", 100),
            ("QualityScore", 100),
            ("MemoryScore", 100)
        ]
    );
}

#[test]
fn test_single_comment_line() {
    let m = analyze_source("// note");
    assert_eq!(m.comment_lines, 1);
    assert_eq!(m.loc, 1);
    assert_eq!(m.comment_to_code_ratio, 100);
}

#[test]
fn test_one_line_method() {
    let m = analyze_source("void foo(){ if(x){ return; } }");
    assert_eq!(m.method_count, 1);
    assert_eq!(m.decision_statements, 1);
    assert_eq!(m.return_count, 1);
    assert_eq!(m.cyclomatic_complexity, 2);
}

const BLOCK: &str = indoc! {"
    int a = 1;
    int b = 2;
    int c = a + b;
    System.out.println(c);
    c++;
"};

#[test]
fn test_repeated_block_counts_once() {
    let twice = format!("{BLOCK}// first gap\n{BLOCK}");
    let thrice = format!("{BLOCK}// first gap\n{BLOCK}// second gap\n{BLOCK}");

    assert_eq!(analyze_source(&twice).duplicate_block_count, 1);
    assert_eq!(analyze_source(&thrice).duplicate_block_count, 1);
}

#[test]
fn test_resource_balance() {
    let opened = "InputStream in = new FileInputStream(path);";
    let closed = "InputStream in = new FileInputStream(path);\nin.close();";
    let over_closed = "a.close();\nb.close();";

    assert_eq!(analyze_source(opened).possible_resource_leaks, 1);
    assert_eq!(analyze_source(closed).possible_resource_leaks, 0);
    assert_eq!(analyze_source(over_closed).possible_resource_leaks, 0);
}

#[test]
fn test_line_endings_do_not_change_metrics() {
    let unix = "class A {\n  // hi\n  void run() {\n    go();\n  }\n}\n";
    let windows = unix.replace('\n', "\r\n");
    assert_eq!(analyze_source(unix), analyze_source(&windows));
}

#[test]
fn test_long_method_threshold_is_configurable() {
    let body: String = (0..10).map(|i| format!("    step{i}();\n")).collect();
    let source = format!("void work() {{\n{body}}}\n");

    let strict = MetricsAnalyzer::new(Thresholds {
        long_method_lines: 5,
        ..Thresholds::default()
    });
    assert_eq!(analyze_source(&source).long_method_count, 0);
    assert_eq!(strict.analyze(&source).long_method_count, 1);
}

#[test]
fn test_realistic_class() {
    let source = indoc! {r#"
        package shop;

        import java.util.List;
        import java.util.ArrayList;
        import java.io.FileReader;

        /* Keeps a running total */
        public class Cart extends Base implements Serializable {
            private int total;
            public static int created = 0;

            // add an item
            public void add(int price) {
                if (price > 0 && price < 1000) {
                    total += price;
                } else {
                    throw new IllegalArgumentException("bad price");
                }
            }

            public int sum(List<Integer> prices) {
                int s = 0;
                for (int p : prices) {
                    s += p;
                }
                return s;
            }
        }
    "#};
    let m = analyze_source(source);

    assert_eq!(m.class_count, 1);
    assert_eq!(m.method_count, 2);
    assert_eq!(m.import_count, 2);
    assert_eq!(m.inheritance_count, 2);
    assert_eq!(m.comment_lines, 2);
    assert_eq!(m.loop_count, 1);
    assert_eq!(m.return_count, 1);
    assert_eq!(m.max_nesting_depth, 3);
    assert_eq!(m.private_field_count, 1);
    // the ArrayList import counts as a collection mention
    assert_eq!(m.memory_allocation_count, 2);
    assert_eq!(m.file_io_count, 1);
    assert_eq!(m.long_class_flag, 0);
}

proptest! {
    #[test]
    fn prop_scores_stay_in_range(source in "(?s).{0,400}") {
        let report = report(&source);
        for (_, value) in report.score_entries() {
            prop_assert!((5..=100).contains(&value));
        }
    }

    #[test]
    fn prop_javaish_scores_stay_in_range(
        lines in prop::collection::vec(
            prop::sample::select(vec![
                "if (a && b) {", "} else {", "}", "for (;;) {", "while (x) {",
                "return new Object();", "new FileInputStream(f);", "x.close();",
                "private int x;", "public String s = new String(\"a\");",
                "// comment", "/* block", "end */", "", "case 1: y = a ? b : c;",
                "static void run() {", "import java.util.Map;",
            ]),
            0..120,
        )
    ) {
        let source = lines.join("\n");
        let report = report(&source);
        for (_, value) in report.score_entries() {
            prop_assert!((5..=100).contains(&value));
        }
    }

    #[test]
    fn prop_analysis_is_deterministic(source in "(?s).{0,300}") {
        let first = report(&source);
        let second = report(&source);
        prop_assert_eq!(first.metric_entries(), second.metric_entries());
        prop_assert_eq!(first.score_entries(), second.score_entries());
    }

    #[test]
    fn prop_line_tally_never_exceeds_loc(source in "(?s).{0,300}") {
        let m = analyze_source(&source);
        prop_assert!(m.empty_lines <= m.loc);
        prop_assert!(m.comment_lines <= m.loc);
        prop_assert!(m.comment_to_code_ratio <= 100);
        prop_assert!(m.long_class_flag <= 1);
        prop_assert!(m.cyclomatic_complexity >= 1);
    }
}
