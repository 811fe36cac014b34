// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Common utilities for integration tests.

#![allow(dead_code)]

use telecom_parcel::telecom::labels::{
    CAPABILITY_HOLD, CAPABILITY_MANAGE_CONFERENCE, CAPABILITY_MERGE_CONFERENCE, CAPABILITY_MUTE,
    STATE_ACTIVE, STATE_NEW, VIDEO_STATE_BIDIRECTIONAL,
};
use telecom_parcel::{
    BinderRef, ComponentName, ConferenceRecord, PhoneAccountHandle, UserHandle, NO_CONNECTTIME,
};

// ============================================================================
// Fixtures
// ============================================================================

/// Connect time used by the reference scenario.
pub const SCENARIO_CONNECT_TIME: i64 = 1_700_000_000_000;

/// The reference scenario: no account, no video, two children.
pub fn scenario_record() -> ConferenceRecord {
    ConferenceRecord::new(
        None,
        STATE_NEW,
        0x41,
        vec!["conn1".to_string(), "conn2".to_string()],
        None,
        0,
        SCENARIO_CONNECT_TIME,
    )
}

/// A SIM account owned by the primary user.
pub fn sim_account() -> PhoneAccountHandle {
    PhoneAccountHandle::new(
        ComponentName::new(
            "com.android.phone",
            "com.android.services.telephony.TelephonyConnectionService",
        ),
        "89014103211118510720",
        UserHandle::SYSTEM,
    )
}

/// A record with every optional field populated.
pub fn video_conference_record() -> ConferenceRecord {
    ConferenceRecord::new(
        Some(sim_account()),
        STATE_ACTIVE,
        CAPABILITY_HOLD | CAPABILITY_MUTE | CAPABILITY_MERGE_CONFERENCE | CAPABILITY_MANAGE_CONFERENCE,
        vec![
            "TelephonyConnection@1".to_string(),
            "TelephonyConnection@2".to_string(),
            "TelephonyConnection@3".to_string(),
        ],
        Some(BinderRef::remote(31)),
        VIDEO_STATE_BIDIRECTIONAL,
        1_712_345_678_901,
    )
}

/// A record that has not connected yet.
pub fn pending_record() -> ConferenceRecord {
    ConferenceRecord::new(None, STATE_NEW, 0, Vec::new(), None, 0, NO_CONNECTTIME)
}

// ============================================================================
// Assertions
// ============================================================================

/// Assert that every field of two records matches, naming the first mismatch.
pub fn assert_same_fields(actual: &ConferenceRecord, expected: &ConferenceRecord) {
    assert_eq!(actual.account(), expected.account(), "account");
    assert_eq!(actual.state(), expected.state(), "state");
    assert_eq!(actual.capabilities(), expected.capabilities(), "capabilities");
    assert_eq!(
        actual.connection_ids(),
        expected.connection_ids(),
        "connection_ids"
    );
    assert_eq!(
        actual.video_provider(),
        expected.video_provider(),
        "video_provider"
    );
    assert_eq!(actual.video_state(), expected.video_state(), "video_state");
    assert_eq!(
        actual.connect_time_millis(),
        expected.connect_time_millis(),
        "connect_time_millis"
    );
}
