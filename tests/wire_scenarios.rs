use std::time::Duration;

use plugwise::messages::{
    AckCode, AcknowledgementV1, Body, NetworkStatusRequest, PowerBufferRequest,
    PowerChangeRequest, PowerInformationResponse, RoleCallResponse, SenseReportRequest,
};
use plugwise::protocol::{checksum, decode_payload};
use plugwise::{Error, MacAddress, Message, MessageType, Payload};

const MAC: MacAddress = MacAddress::new(0x0123_4567_89AB_CDEF);

#[test]
fn stick_init_frame() {
    assert_eq!(checksum("000A"), "B43C");

    let frame = Message::new(NetworkStatusRequest).to_hex_string().unwrap();
    assert_eq!(frame, "000AB43C");

    let decoded = Message::decode(&frame).unwrap();
    assert_eq!(decoded.message_type(), MessageType::NetworkStatusRequest);
    assert_eq!(decoded.sequence(), None);
}

#[test]
fn power_change_appends_flag_after_mac() {
    let request = PowerChangeRequest {
        mac: MAC,
        power_state: true,
    };
    assert_eq!(request.to_payload().unwrap(), "0123456789ABCDEF01");
    assert_eq!(
        Message::new(request).to_hex_string().unwrap(),
        "00170123456789ABCDEF01703A"
    );
}

#[test]
fn power_information_without_correction() {
    let frame = "00130A3F0123456789ABCDEF0001000200000003000000040000C938";
    let message = Message::decode(frame).unwrap();
    assert_eq!(message.sequence(), Some(0x0A3F));
    assert_eq!(message.mac(), Some(MAC));

    let Body::PowerInformationResponse(info) = message.body() else {
        panic!("unexpected body: {:?}", message.body());
    };
    assert_eq!(info.one_second.pulses, 1);
    assert_eq!(info.one_second.interval, Duration::from_secs(1));
    assert_eq!(info.eight_seconds.interval, Duration::from_secs(8));
    assert_eq!(info.one_hour_consumed.pulses, 3);
    assert_eq!(info.one_hour_produced.pulses, 4);
    assert_eq!(info.one_hour_produced.interval, Duration::from_secs(3600));

    assert_eq!(message.to_hex_string().unwrap(), frame);
}

#[test]
fn power_information_reencodes_correction() {
    let info = PowerInformationResponse::from_raw(MAC, 10, 80, 1, 0, 0x2000);
    let payload = info.to_payload().unwrap();
    assert!(payload.ends_with("2000"));
    assert_eq!(PowerInformationResponse::from_payload(&payload).unwrap(), info);
}

#[test]
fn power_buffer_request_first_log_address() {
    let request = PowerBufferRequest {
        mac: MAC,
        log_address: 0,
    };
    assert_eq!(request.to_payload().unwrap(), "0123456789ABCDEF00044000");
    assert_eq!(
        Message::new(request).to_hex_string().unwrap(),
        "00480123456789ABCDEF00044000F5CA"
    );
}

#[test]
fn sense_report_width_is_enforced() {
    let valid = "0123456789ABCDEF12345678";
    let report = SenseReportRequest::from_payload(valid).unwrap();
    assert_eq!(report.mac, MAC);
    assert_eq!(report.humidity, 0x1234);
    assert_eq!(report.temperature, 0x5678);

    for payload in [&valid[..22], "0123456789ABCDEF1234567800"] {
        let result = decode_payload(MessageType::SenseReportRequest, None, payload);
        assert!(
            matches!(
                result,
                Err(Error::PayloadMismatch {
                    message_type: MessageType::SenseReportRequest,
                    ..
                })
            ),
            "{payload} should be rejected"
        );
    }
}

#[test]
fn acknowledgement_with_and_without_node() {
    let message = Message::decode("0000000100C1FEED").unwrap();
    assert_eq!(message.sequence(), Some(1));
    assert_eq!(
        message.body(),
        &Body::AcknowledgementV1(AcknowledgementV1 {
            code: AckCode::Success,
            mac: None,
        })
    );

    let message = Message::decode("0000000100D70123456789ABCDEF15F1").unwrap();
    assert_eq!(message.mac(), Some(MAC));
    assert!(matches!(
        message.body(),
        Body::AcknowledgementV1(AcknowledgementV1 {
            code: AckCode::ClockAccepted,
            ..
        })
    ));
}

#[test]
fn role_call_empty_slot() {
    let message = Message::decode("001900010123456789ABCDEFFFFFFFFFFFFFFFFF00A3B2").unwrap();
    assert_eq!(
        message.into_body(),
        Body::RoleCallResponse(RoleCallResponse {
            mac: MAC,
            node_mac: None,
            node_id: 0,
        })
    );
}

#[test]
fn lowercase_checksum_is_accepted() {
    let message = Message::decode("000Ab43c").unwrap();
    assert_eq!(message.message_type(), MessageType::NetworkStatusRequest);
}

#[test]
fn rejected_frames() {
    assert!(matches!(
        Message::decode("000AB43D"),
        Err(Error::ChecksumMismatch { .. })
    ));
    assert!(matches!(
        Message::decode("000A"),
        Err(Error::FrameTooShort { .. })
    ));

    let body = "7777";
    let frame = format!("{body}{}", checksum(body));
    assert_eq!(
        Message::decode(&frame),
        Err(Error::UnknownMessageType {
            code: "7777".to_owned()
        })
    );
}

#[test]
fn every_type_code_resolves() {
    for message_type in MessageType::ALL {
        let code = format!("{:04X}", message_type.code());
        assert_eq!(MessageType::from_code(&code).unwrap(), message_type);
    }
}
