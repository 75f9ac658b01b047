use crate::config::WidgetConfig;

use serde_json::{json, Value};

const METRIC_NAMESPACE: &str = "AWS/MediaConnect";
const METRIC_NAME: &str = "OutputConnected";
const METRIC_DIMENSION: &str = "OutputARN";

const COLOR_GREEN: &str = "#2ca02c";
const COLOR_RED: &str = "#d62728";

/// Short label for an output: the last `:`-separated segment of its ARN
pub fn output_label(arn: &str) -> &str {
    arn.rsplit(':').next().unwrap_or(arn)
}

/// Hidden per-output metric, summed up by the total expression
fn output_metric(index: usize, arn: &str, config: &WidgetConfig) -> Value {
    json!([
        METRIC_NAMESPACE,
        METRIC_NAME,
        METRIC_DIMENSION,
        arn,
        {
            "id": format!("m{}", index + 1),
            "visible": false,
            "region": config.region,
            "label": output_label(arn),
        }
    ])
}

/// Build a gauge widget showing how many of the given outputs are connected
pub fn create_widget(arns: &[String], search_string: &str, config: &WidgetConfig) -> Value {
    let mut metrics = vec![json!([{
        "expression": "SUM(METRICS())",
        "label": "Total",
        "id": "e1",
        "region": config.region,
        "period": config.period,
        "color": COLOR_GREEN,
    }])];
    metrics.extend(
        arns.iter()
            .enumerate()
            .map(|(i, arn)| output_metric(i, arn, config)),
    );

    json!({
        "type": "metric",
        "properties": {
            "sparkline": true,
            "view": "gauge",
            "metrics": metrics,
            "region": config.region,
            "stat": config.stat,
            "period": config.period,
            "yAxis": {
                "left": {
                    "min": 0,
                    "max": arns.len(),
                }
            },
            "annotations": {
                "horizontal": [
                    {
                        "color": COLOR_RED,
                        "label": format!("Max {} connections", config.connection_limit),
                        "value": config.connection_limit,
                        "fill": "above",
                    },
                    {
                        "color": COLOR_GREEN,
                        "label": "Untitled annotation",
                        "value": config.connection_limit,
                        "fill": "below",
                    }
                ]
            },
            "legend": {
                "position": "bottom",
            },
            "title": format!("{} Connections", search_string),
        }
    })
}
