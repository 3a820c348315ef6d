use kong_gateway_webservice::{packer_template, write_packer_config, DeployPayload};

fn payload() -> DeployPayload {
    DeployPayload::from_json(
        br#"{"sslCertBase64":"Zm9v","sslCertKeyBase64":"YmFy","kongApiGatewayDomain":"api.example.com"}"#,
    )
    .unwrap()
}

#[test]
fn renders_the_full_packer_document() {
    let expected = r#"required_plugins {
  amazon {
    version = ">= 0.0.2"
    source  = "github.com/hashicorp/amazon"
  }
  qubitpi {
    version = ">= 0.0.50"
    source  = "github.com/QubitPi/qubitpi"
  }
}

source "amazon-ebs" "qubitpi" {
  ami_name              = "my-kong-api-gateway"
  force_deregister      = "true"
  force_delete_snapshot = "true"
  instance_type         = "t2.micro"
  region                = "us-west-1"
  ssh_username          = "ubuntu"
  source_ami_filter {
    most_recent = true
    owners      = ["099720109477"]
    filters {
      name                = "ubuntu/images/*ubuntu-*-22.04-amd64-server-*"
      root-device-type    = "ebs"
      virtualization-type = "hvm"
    }
  }
  launch_block_device_mappings {
    device_name           = "/dev/sda1"
    volume_size           = 8
    volume_type           = "gp2"
    delete_on_termination = true
  }
}

build {
  sources = ["source.amazon-ebs.qubitpi"]
  provisioner "qubitpi-kong-api-gateway-provisioner" {
    homeDir              = "/home/ubuntu"
    sslCertBase64        = "Zm9v"
    sslCertKeyBase64     = "YmFy"
    kongApiGatewayDomain = "api.example.com"
  }
}
"#;

    assert_eq!(packer_template(&payload()), expected);
}

#[test]
fn rendering_is_deterministic() {
    let payload = payload();
    assert_eq!(packer_template(&payload), packer_template(&payload));
}

#[test]
fn payload_values_appear_only_in_the_provisioner_block() {
    let rendered = packer_template(&payload());

    // Each value is substituted exactly once, on its own attribute
    assert_eq!(rendered.matches("\"Zm9v\"").count(), 1);
    assert_eq!(rendered.matches("\"YmFy\"").count(), 1);
    assert_eq!(rendered.matches("\"api.example.com\"").count(), 1);
    assert!(rendered.contains("sslCertBase64        = \"Zm9v\""));
    assert!(rendered.contains("sslCertKeyBase64     = \"YmFy\""));
    assert!(rendered.contains("kongApiGatewayDomain = \"api.example.com\""));
}

#[test]
fn build_block_references_the_source_labels() {
    let rendered = packer_template(&payload());

    assert!(rendered.contains("source \"amazon-ebs\" \"qubitpi\" {"));
    assert!(rendered.contains("sources = [\"source.amazon-ebs.qubitpi\"]"));
}

#[test]
fn writes_the_document_in_one_shot() {
    let dir = tempfile::tempdir().unwrap();
    let out_file = dir.path().join("kong.pkr.hcl");

    let payload = payload();
    write_packer_config(&payload, &out_file).unwrap();

    let written = std::fs::read_to_string(&out_file).unwrap();
    assert_eq!(written, packer_template(&payload));
}
