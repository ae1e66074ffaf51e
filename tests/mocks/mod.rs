pub mod storage_mock;
