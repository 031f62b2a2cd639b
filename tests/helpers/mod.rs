pub mod mock_slack;
