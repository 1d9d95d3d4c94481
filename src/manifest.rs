//! Kubernetes Deployment manifest rendering
//!
//! A static Deployment template with a handful of substitution points,
//! consumed by external deployment tooling. Placeholders are triple-braced
//! and substituted verbatim (no escaping); the `dockerSecret` section is
//! emitted only when an image pull secret is configured. Health-check
//! probes stay commented out in the rendered output.

use serde::{Deserialize, Serialize};

const DEPLOYMENT_TEMPLATE: &str = r#"apiVersion: apps/v1
kind: Deployment
metadata:
  name: {{{name}}}
  namespace: {{{namespace}}}
  labels:
    app: {{{name}}}
spec:
  replicas: 1
  selector:
    matchLabels:
      app: {{{name}}}
  template:
    metadata:
      labels:
        app: {{{name}}}
    spec:
      containers:
        - name: {{{name}}}
          image: {{{image}}}
          imagePullPolicy: Always
          ports:
            - name: http
              containerPort: 8080
              protocol: TCP
          env:
            - name: MICRONAUT_SERVER_PORT
              value: "8080"
          resources:
            limits:
              cpu: "1"
              memory: 2048Mi
#          livenessProbe:
#            httpGet:
#              path: /health/liveness
#              port: 8080
#            initialDelaySeconds: 5
#            periodSeconds: 10
#          readinessProbe:
#            httpGet:
#              path: /health/readiness
#              port: 8080
#            initialDelaySeconds: 5
#            periodSeconds: 10
{{#dockerSecret}}
      imagePullSecrets:
        - name: {{{dockerSecret}}}
{{/dockerSecret}}
"#;

const SECRET_OPEN: &str = "{{#dockerSecret}}\n";
const SECRET_CLOSE: &str = "{{/dockerSecret}}\n";

/// Substitution values for the Deployment template.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManifestParams {
    pub name: String,
    pub namespace: String,
    pub image: String,
    pub docker_secret: Option<String>,
}

/// Renders the Deployment manifest for `params`.
pub fn render(params: &ManifestParams) -> String {
    let text = render_secret_section(DEPLOYMENT_TEMPLATE, params.docker_secret.as_deref());
    text.replace("{{{name}}}", &params.name)
        .replace("{{{namespace}}}", &params.namespace)
        .replace("{{{image}}}", &params.image)
}

/// Keeps or drops the `{{#dockerSecret}}...{{/dockerSecret}}` block.
fn render_secret_section(template: &str, secret: Option<&str>) -> String {
    let (open, close) = match (template.find(SECRET_OPEN), template.find(SECRET_CLOSE)) {
        (Some(open), Some(close)) if open < close => (open, close),
        _ => return template.to_string(),
    };

    let mut out = String::with_capacity(template.len());
    out.push_str(&template[..open]);
    if let Some(secret) = secret {
        let body = &template[open + SECRET_OPEN.len()..close];
        out.push_str(&body.replace("{{{dockerSecret}}}", secret));
    }
    out.push_str(&template[close + SECRET_CLOSE.len()..]);
    out
}
