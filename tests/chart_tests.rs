use pretty_assertions::assert_eq;
use tensorscope::cfg::{BasicBlock, BlockId, ControlFlowGraph};
use tensorscope::chart::{build_heatmap, cfg_to_chart, confidence_chart};
use tensorscope::report::schema::{FrameworkScore, OperationSites, Site};
use tensorscope::utils::error::ChartError;

fn sites(entries: &[(i64, i64)]) -> Vec<Site> {
    entries
        .iter()
        .map(|&(address, size)| Site { address, size })
        .collect()
}

#[test]
fn test_cfg_chart_counts_match_graph() {
    let mut cfg = ControlFlowGraph::new();
    cfg.add_block(BasicBlock::new(0x1000u64).with_instructions(vec![
        "push rbp".to_string(),
        "mov rbp, rsp".to_string(),
    ]))
    .unwrap();
    cfg.add_block(BasicBlock::new(0x1020u64).with_kind("call_block"))
        .unwrap();
    cfg.add_block(BasicBlock::new(0x1040u64)).unwrap();
    cfg.add_edge(&BlockId::Address(0x1000), &BlockId::Address(0x1020), None)
        .unwrap();
    cfg.add_edge(
        &BlockId::Address(0x1020),
        &BlockId::Address(0x1040),
        Some("fallthrough".to_string()),
    )
    .unwrap();

    let doc = cfg_to_chart(&cfg);

    assert_eq!(doc.nodes.len(), cfg.node_count());
    assert_eq!(doc.links.len(), cfg.edge_count());

    // Dense 0-based relabeling with no duplicates
    let ids: Vec<usize> = doc.nodes.iter().map(|n| n.id).collect();
    assert_eq!(ids, vec![0, 1, 2]);

    assert_eq!(doc.nodes[0].address, "0x1000");
    assert_eq!(doc.nodes[0].size, 2);
    assert_eq!(doc.nodes[1].kind, "call_block");
    assert_eq!(doc.nodes[2].kind, "basic_block");
    assert_eq!(doc.links[0].kind, "flow");
    assert_eq!(doc.links[1].kind, "fallthrough");
}

#[test]
fn test_empty_cfg_yields_empty_document() {
    let doc = cfg_to_chart(&ControlFlowGraph::new());

    assert!(doc.nodes.is_empty());
    assert!(doc.links.is_empty());
}

#[test]
fn test_confidence_chart_matches_report_order() {
    let scores = vec![
        FrameworkScore {
            framework: "tensorflow".to_string(),
            confidence: 0.8,
        },
        FrameworkScore {
            framework: "pytorch".to_string(),
            confidence: 0.2,
        },
        FrameworkScore {
            framework: "unknown".to_string(),
            confidence: 0.0,
        },
    ];

    let chart = confidence_chart(&scores);

    let rendered: Vec<(String, f64)> = chart
        .data
        .iter()
        .map(|e| (e.framework.clone(), e.confidence))
        .collect();

    assert_eq!(
        rendered,
        vec![
            ("tensorflow".to_string(), 80.0),
            ("pytorch".to_string(), 20.0),
            ("unknown".to_string(), 0.0),
        ]
    );
}

#[test]
fn test_heatmap_worked_example() {
    let ops = vec![
        OperationSites {
            operation: "matmul".to_string(),
            sites: sites(&[(0x1000, 10), (0x2000, 15)]),
        },
        OperationSites {
            operation: "conv".to_string(),
            sites: sites(&[(0x1500, 20)]),
        },
    ];

    let doc = build_heatmap(&ops, 0x3000, 50).unwrap();

    assert_eq!(doc.data.len(), 2);
    assert!(doc.data.iter().all(|s| s.distribution.len() == 50));
    assert_eq!(doc.data[0].distribution.iter().sum::<u64>(), 2);
    assert_eq!(doc.data[1].distribution.iter().sum::<u64>(), 1);
}

#[test]
fn test_heatmap_counts_sum_to_observations() {
    let ops = vec![OperationSites {
        operation: "matmul".to_string(),
        sites: sites(&[(0, 1), (1, 1), (50, 1), (99, 1), (100, 1), (500, 1)]),
    }];

    let doc = build_heatmap(&ops, 100, 7).unwrap();

    // Out-of-range addresses fold into the last bin instead of dropping
    assert_eq!(doc.data[0].distribution.iter().sum::<u64>(), 6);
    assert_eq!(doc.data[0].distribution.len(), 7);
}

#[test]
fn test_heatmap_rejects_bad_arguments() {
    assert!(matches!(
        build_heatmap(&[], 0, 50),
        Err(ChartError::InvalidArgument(_))
    ));
    assert!(matches!(
        build_heatmap(&[], 0x1000, 0),
        Err(ChartError::InvalidArgument(_))
    ));

    let ops = vec![OperationSites {
        operation: "conv".to_string(),
        sites: sites(&[(-8, 4)]),
    }];
    assert!(matches!(
        build_heatmap(&ops, 0x1000, 50),
        Err(ChartError::InvalidAddress { .. })
    ));
}
