//! Tensor-operation heatmap builder.
//!
//! Buckets operation addresses into a fixed number of bins across the
//! binary image so the front end can render density per region.

use crate::chart::schema::{HeatmapConfig, HeatmapDoc, HeatmapSeries};
use crate::report::schema::OperationSites;
use crate::utils::error::ChartError;
use log::debug;

/// Build the heatmap document from tensor-operation observations.
///
/// **Public** - main entry point for heatmap generation
///
/// Bin width is `binary_size / num_bins` with real-valued division, so
/// boundaries stay correct when the size is not a multiple of the bin
/// count. An address maps to `floor(address / width)`, clamped to the
/// last bin; addresses at or past the end of the image fold into the
/// last bin rather than being dropped. Every operation type emits
/// exactly `num_bins` counts, all zero when it has no observations.
///
/// # Arguments
/// * `ops` - Observations per operation type, in report order
/// * `binary_size` - Total size of the binary image in bytes
/// * `num_bins` - Number of bins (`DEFAULT_BIN_COUNT` from the CLI)
///
/// # Errors
/// * `ChartError::InvalidArgument` - non-positive size or bin count
/// * `ChartError::InvalidAddress` - an observation has a negative address
pub fn build_heatmap(
    ops: &[OperationSites],
    binary_size: i64,
    num_bins: usize,
) -> Result<HeatmapDoc, ChartError> {
    if binary_size <= 0 {
        return Err(ChartError::InvalidArgument(format!(
            "binary size must be positive, got {}",
            binary_size
        )));
    }
    if num_bins == 0 {
        return Err(ChartError::InvalidArgument(
            "bin count must be positive".to_string(),
        ));
    }

    let bin_size = binary_size as f64 / num_bins as f64;

    debug!(
        "Building heatmap: {} operation types, {} bins of {:.1} bytes",
        ops.len(),
        num_bins,
        bin_size
    );

    let mut data = Vec::with_capacity(ops.len());
    for op in ops {
        let mut bins = vec![0u64; num_bins];
        for site in &op.sites {
            if site.address < 0 {
                return Err(ChartError::InvalidAddress {
                    operation: op.operation.clone(),
                    address: site.address,
                });
            }

            // Floor of the real-valued quotient, clamped into range
            let bin_idx = ((site.address as f64 / bin_size) as usize).min(num_bins - 1);
            bins[bin_idx] += 1;
        }

        data.push(HeatmapSeries {
            operation: op.operation.clone(),
            distribution: bins,
        });
    }

    Ok(HeatmapDoc {
        chart_type: "heatmap".to_string(),
        data,
        config: HeatmapConfig {
            x_axis: "binary_location".to_string(),
            y_axis: "operation_type".to_string(),
            bin_size,
            total_bins: num_bins,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::schema::Site;

    fn op(operation: &str, sites: &[(i64, i64)]) -> OperationSites {
        OperationSites {
            operation: operation.to_string(),
            sites: sites
                .iter()
                .map(|&(address, size)| Site { address, size })
                .collect(),
        }
    }

    #[test]
    fn test_heatmap_shape_and_counts() {
        let ops = vec![
            op("matmul", &[(0x1000, 10), (0x2000, 15)]),
            op("conv", &[(0x1500, 20)]),
        ];

        let doc = build_heatmap(&ops, 0x3000, 50).unwrap();

        assert_eq!(doc.chart_type, "heatmap");
        assert_eq!(doc.data.len(), 2);
        assert_eq!(doc.data[0].operation, "matmul");
        assert!(doc.data.iter().all(|s| s.distribution.len() == 50));
        assert_eq!(doc.data[0].distribution.iter().sum::<u64>(), 2);
        assert_eq!(doc.data[1].distribution.iter().sum::<u64>(), 1);
        assert_eq!(doc.config.total_bins, 50);
    }

    #[test]
    fn test_bin_placement() {
        // 100 bytes over 10 bins: width 10.0
        let ops = vec![op("matmul", &[(0, 4), (9, 4), (10, 4), (95, 4)])];

        let doc = build_heatmap(&ops, 100, 10).unwrap();
        let bins = &doc.data[0].distribution;

        assert_eq!(bins[0], 2);
        assert_eq!(bins[1], 1);
        assert_eq!(bins[9], 1);
    }

    #[test]
    fn test_address_at_end_folds_into_last_bin() {
        let ops = vec![op("conv", &[(100, 4), (250, 4)])];

        let doc = build_heatmap(&ops, 100, 10).unwrap();
        let bins = &doc.data[0].distribution;

        assert_eq!(bins[9], 2);
        assert_eq!(bins.iter().sum::<u64>(), 2);
    }

    #[test]
    fn test_uneven_bin_width() {
        // 100 bytes over 3 bins: width 33.33..., address 33 lands in bin 0
        let ops = vec![op("matmul", &[(33, 1), (34, 1), (99, 1)])];

        let doc = build_heatmap(&ops, 100, 3).unwrap();
        let bins = &doc.data[0].distribution;

        assert_eq!(bins, &vec![1, 1, 1]);
    }

    #[test]
    fn test_empty_operation_gets_zero_bins() {
        let ops = vec![op("softmax", &[])];

        let doc = build_heatmap(&ops, 0x1000, 50).unwrap();

        assert_eq!(doc.data[0].distribution.len(), 50);
        assert!(doc.data[0].distribution.iter().all(|&count| count == 0));
    }

    #[test]
    fn test_invalid_binary_size() {
        let err = build_heatmap(&[], 0, 50).unwrap_err();
        assert!(matches!(err, ChartError::InvalidArgument(_)));

        let err = build_heatmap(&[], -4096, 50).unwrap_err();
        assert!(matches!(err, ChartError::InvalidArgument(_)));
    }

    #[test]
    fn test_invalid_bin_count() {
        let err = build_heatmap(&[], 0x1000, 0).unwrap_err();
        assert!(matches!(err, ChartError::InvalidArgument(_)));
    }

    #[test]
    fn test_negative_address_rejected() {
        let ops = vec![op("matmul", &[(-1, 4)])];

        let err = build_heatmap(&ops, 0x1000, 50).unwrap_err();
        assert!(matches!(
            err,
            ChartError::InvalidAddress { address: -1, .. }
        ));
    }
}
