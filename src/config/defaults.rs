use std::collections::BTreeMap;

/// Shortcuts written out when no config file exists yet.
const DEFAULT_SHORTCUTS: &[(&str, &str)] = &[
    ("Alertmanager", "am"),
    ("APIService", "asvc"),
    ("ClusterRole", "crol"),
    ("ClusterRoleBinding", "crb"),
    ("ConfigMap", "cm"),
    ("CronJob", "cj"),
    ("CustomResourceDefinition", "crd"),
    ("DaemonSet", "ds"),
    ("Deployment", "dep"),
    ("HorizontalPodAutoscaler", "hpa"),
    ("Ingress", "ing"),
    ("Job", "job"),
    ("MutatingWebhookConfiguration", "mwc"),
    ("Namespace", "ns"),
    ("NetworkPolicy", "np"),
    ("PersistentVolumeClaim", "pvc"),
    ("PodDisruptionBudget", "pdb"),
    ("PriorityClass", "pc"),
    ("Prometheus", "prom"),
    ("PrometheusRule", "prul"),
    ("Role", "rol"),
    ("RoleBinding", "rb"),
    ("Secret", "sec"),
    ("Service", "svc"),
    ("ServiceAccount", "sa"),
    ("ServiceMonitor", "sm"),
    ("StatefulSet", "ss"),
    ("StorageClass", "sc"),
    ("ValidatingWebhookConfiguration", "vwc"),
];

pub fn default_shortcuts() -> BTreeMap<String, String> {
    DEFAULT_SHORTCUTS
        .iter()
        .map(|(kind, code)| (kind.to_string(), code.to_string()))
        .collect()
}
