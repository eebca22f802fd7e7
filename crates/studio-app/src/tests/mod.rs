mod event_channel_tests;
