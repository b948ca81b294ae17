// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// Namespace used when none is given on the command line
pub const DEFAULT_NAMESPACE: &str = "default";

/// Labels shared by the pod template and both service selectors
pub mod labels {
    pub const APP_KEY: &str = "app";
    pub const APP_VALUE: &str = "server";
}

/// The api server deployment
pub mod deployment {
    pub const NAME: &str = "apiserver";
    pub const REPLICAS: i32 = 2;
    pub const CONTAINER_NAME: &str = "ecommerce";
    pub const IMAGE: &str = "raihankhanraka/ecommerce-api:v1.1";
    pub const PORT_NAME: &str = "http";
}

/// Service names and port mapping
pub mod service {
    pub const CLUSTER_IP_NAME: &str = "server-svc";
    pub const NODE_PORT_NAME: &str = "nodeport-svc";
    pub const NODE_PORT_TYPE: &str = "NodePort";
    /// Fixed node port exposed on every cluster node
    pub const NODE_PORT: i32 = 30184;
}

/// Ingress routing
pub mod ingress {
    pub const NAME: &str = "server-ingress";
    pub const HOST: &str = "raka.com";
    pub const PATH_TYPE: &str = "Prefix";
    pub const PATHS: [&str; 2] = ["/login", "/products"];
}

/// Port the container listens on and every service forwards to
pub const SERVER_PORT: i32 = 8080;
pub const PROTOCOL_TCP: &str = "TCP";
