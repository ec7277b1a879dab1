//! HTML rendering of lookup outcomes.
//!
//! The page is a single form with the result block underneath. Values are
//! interpolated through an askama template, which HTML-escapes them.

use askama::Template;

use crate::error_handling::LookupError;
use crate::lookup::LookupOutcome;

/// One labelled line of the result block.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultField {
    pub label: &'static str,
    pub value: String,
}

#[derive(Template)]
#[template(path = "index.html")]
struct IndexPage<'a> {
    query: &'a str,
    fields: Vec<ResultField>,
    failures: Vec<String>,
}

/// Renders the full page for `query` and its outcome.
///
/// `query` pre-fills the input box. Successful stages contribute their labelled
/// fields, failed stages contribute their message.
///
/// # Errors
///
/// Returns an error if the template fails to render.
pub fn render_page(query: &str, outcome: &LookupOutcome) -> Result<String, askama::Error> {
    IndexPage {
        query,
        fields: result_fields(outcome),
        failures: outcome.errors().into_iter().map(failure_message).collect(),
    }
    .render()
}

/// Labelled result lines, in display order.
pub fn result_fields(outcome: &LookupOutcome) -> Vec<ResultField> {
    let LookupOutcome::Resolved {
        address, geo, asn, ..
    } = outcome
    else {
        return Vec::new();
    };

    let mut fields = vec![field("IP地址", address.to_string())];
    if let Ok(geo) = geo {
        fields.push(field("国家/地区", geo.country.clone()));
        fields.push(field("省份", geo.province.clone()));
        fields.push(field("城市", geo.city.clone()));
        fields.push(field("纬度", format!("{:.6}", geo.latitude)));
        fields.push(field("经度", format!("{:.6}", geo.longitude)));
    }
    if let Ok(asn) = asn {
        fields.push(field("ASN", asn.number.to_string()));
        fields.push(field("运营商", asn.organization.clone()));
    }
    fields
}

/// User-facing message for a failed stage.
pub fn failure_message(error: &LookupError) -> String {
    match error {
        LookupError::Dns { host } => format!("无法解析该IP或域名: {host}"),
        LookupError::Geo => "查询GeoLite2-City数据库失败".to_string(),
        LookupError::Asn => "查询GeoLite2-ASN数据库失败".to_string(),
    }
}

fn field(label: &'static str, value: String) -> ResultField {
    ResultField { label, value }
}
