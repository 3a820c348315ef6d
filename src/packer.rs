//! Packer build recipe for the Kong API Gateway AMI
//!
//! Everything except the three payload values is a compile-time constant:
//! the same AMI parameters are baked into every generated file so that two
//! requests with the same payload produce byte-identical output.
use crate::hcl::{Block, Document, Value};
use crate::{DeployPayload, Error};

/// Default name of the generated file, relative to the working directory.
pub const DEFAULT_OUTPUT_FILE: &str = "kong.pkr.hcl";

const AMAZON_PLUGIN_VERSION: &str = ">= 0.0.2";
const AMAZON_PLUGIN_SOURCE: &str = "github.com/hashicorp/amazon";
const QUBITPI_PLUGIN_VERSION: &str = ">= 0.0.50";
const QUBITPI_PLUGIN_SOURCE: &str = "github.com/QubitPi/qubitpi";

// Labels of the source block; the build block references the same pair.
const SOURCE_TYPE: &str = "amazon-ebs";
const SOURCE_NAME: &str = "qubitpi";

const AMI_NAME: &str = "my-kong-api-gateway";
const INSTANCE_TYPE: &str = "t2.micro";
const REGION: &str = "us-west-1";
const SSH_USERNAME: &str = "ubuntu";

// Canonical Ubuntu publisher account
const UBUNTU_OWNER_ID: &str = "099720109477";
const UBUNTU_AMI_FILTER: &str = "ubuntu/images/*ubuntu-*-22.04-amd64-server-*";

const ROOT_DEVICE_NAME: &str = "/dev/sda1";
const ROOT_VOLUME_SIZE_GB: u64 = 8;
const ROOT_VOLUME_TYPE: &str = "gp2";

const PROVISIONER_NAME: &str = "qubitpi-kong-api-gateway-provisioner";
const PROVISIONER_HOME_DIR: &str = "/home/ubuntu";

/// Render the full Packer configuration for the given payload.
///
/// Output is deterministic: same payload, byte-identical document.
pub fn packer_template(payload: &DeployPayload) -> String {
    Document::new()
        .block(required_plugins())
        .block(ami_source())
        .block(build(payload))
        .render()
}

fn required_plugins() -> Block {
    Block::new("required_plugins")
        .block(
            Block::new("amazon")
                .attr("version", AMAZON_PLUGIN_VERSION)
                .attr("source", AMAZON_PLUGIN_SOURCE),
        )
        .block(
            Block::new("qubitpi")
                .attr("version", QUBITPI_PLUGIN_VERSION)
                .attr("source", QUBITPI_PLUGIN_SOURCE),
        )
}

fn ami_source() -> Block {
    Block::labeled("source", &[SOURCE_TYPE, SOURCE_NAME])
        .attr("ami_name", AMI_NAME)
        .attr("force_deregister", "true")
        .attr("force_delete_snapshot", "true")
        .attr("instance_type", INSTANCE_TYPE)
        .attr("region", REGION)
        .attr("ssh_username", SSH_USERNAME)
        .block(
            Block::new("source_ami_filter")
                .attr("most_recent", true)
                .attr("owners", Value::list([UBUNTU_OWNER_ID]))
                .block(
                    Block::new("filters")
                        .attr("name", UBUNTU_AMI_FILTER)
                        .attr("root-device-type", "ebs")
                        .attr("virtualization-type", "hvm"),
                ),
        )
        .block(
            Block::new("launch_block_device_mappings")
                .attr("device_name", ROOT_DEVICE_NAME)
                .attr("volume_size", ROOT_VOLUME_SIZE_GB)
                .attr("volume_type", ROOT_VOLUME_TYPE)
                .attr("delete_on_termination", true),
        )
}

fn build(payload: &DeployPayload) -> Block {
    Block::new("build")
        .attr(
            "sources",
            Value::list([format!("source.{}.{}", SOURCE_TYPE, SOURCE_NAME)]),
        )
        .block(
            Block::labeled("provisioner", &[PROVISIONER_NAME])
                .attr("homeDir", PROVISIONER_HOME_DIR)
                .attr("sslCertBase64", payload.ssl_cert_base64())
                .attr("sslCertKeyBase64", payload.ssl_cert_key_base64())
                .attr("kongApiGatewayDomain", payload.kong_api_gateway_domain()),
        )
}

/// Write the rendered configuration in one shot, replacing any previous file.
pub fn write_packer_config<P: AsRef<std::path::Path>>(
    payload: &DeployPayload,
    out_file: P,
) -> Result<(), Error> {
    use std::io::Write;

    let mut f = std::fs::File::create(out_file)?;
    f.write_all(packer_template(payload).as_bytes())?;
    Ok(())
}
