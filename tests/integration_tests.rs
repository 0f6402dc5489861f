//! End-to-end pipeline tests against mocked Tableau endpoints

use serde_json::json;
use tableau_lineage::output::{output_schema, rows_to_batch};
use tableau_lineage::{ConnectorConfig, LineagePipeline};
use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn full_pipeline_flattens_lineage() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/3.9/auth/signin"))
        .and(body_string_contains("personalAccessTokenName"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "credentials": {
                "site": { "id": "site-1", "contentUrl": "" },
                "token": "integration-token"
            }
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/metadata/graphql"))
        .and(header("X-Tableau-Auth", "integration-token"))
        .and(body_string_contains("publishedDatasources"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "publishedDatasources": [
                    {
                        "name": "DS1",
                        "isCertified": true,
                        "downstreamFlows": [
                            { "name": "F1", "owner": { "name": "Alice" }, "projectName": "P1" },
                            { "name": "F2", "owner": { "name": "Bob" }, "projectName": "P1" }
                        ]
                    },
                    {
                        "name": "DS2",
                        "isCertified": false,
                        "downstreamFlows": []
                    }
                ]
            }
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = ConnectorConfig::new(mock_server.uri(), "ci-token", "ci-secret").unwrap();
    let pipeline = LineagePipeline::new(config).unwrap();

    let rows = pipeline.fetch_rows().await.unwrap();
    let flat: Vec<[&str; 4]> = rows
        .iter()
        .map(|r| {
            [
                r.ds_name.as_str(),
                r.flow_name.as_str(),
                r.owner_name.as_str(),
                r.project_name.as_str(),
            ]
        })
        .collect();

    // DS2 has no downstream flows, so it contributes no rows.
    assert_eq!(
        flat,
        vec![
            ["DS1", "F1", "Alice", "P1"],
            ["DS1", "F2", "Bob", "P1"],
        ]
    );

    let batch = rows_to_batch(&rows).unwrap();
    assert_eq!(batch.schema(), output_schema());
    assert_eq!(batch.num_rows(), 2);
}
